use services::Navigator;
use tracing::info;

/// Navigator for a process without a browser: prints the page the user
/// should open next.
pub struct TerminalNavigator {
    origin: String,
}

impl TerminalNavigator {
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self {
            origin: api_base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn absolute(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }
}

impl Navigator for TerminalNavigator {
    fn go_to(&self, path: &str) {
        let target = self.absolute(path);
        info!(%target, "navigating");
        println!("open {target}");
    }
}
