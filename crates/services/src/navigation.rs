use std::sync::{Arc, Mutex, PoisonError};

/// Page navigation capability.
///
/// Navigation is fire-and-forget: implementations must not fail and callers
/// never wait for the new page.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

/// Navigator that only remembers where it was sent. Clones share history.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        tracing::debug!(path, "navigation requested");
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}
