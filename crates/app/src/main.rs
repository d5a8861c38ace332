mod cli;
mod terminal_navigator;

use std::fmt;
use std::sync::Arc;

use clap::Parser;
use services::AppServices;
use study_core::model::Dashboard;
use tracing_subscriber::EnvFilter;
use ui::{ProgressCardVm, render_progress_card};

use crate::cli::{Cli, Command};
use crate::terminal_navigator::TerminalNavigator;

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_dashboard(dashboard: &Dashboard) {
    println!(
        "{} topics, {} min studied, {:.0}% average completion",
        dashboard.total_topics, dashboard.total_study_time, dashboard.average_completion
    );
    for entry in &dashboard.topics {
        let card = ProgressCardVm::from(&entry.progress);
        println!(
            "  {:<32} {:>5} complete  {} modules  {}",
            entry.topic.name,
            card.completion_label,
            card.modules_completed,
            card.study_time_label
        );
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config();

    // sqlx creates the file but not its parent directories.
    prepare_sqlite_file(&config.db_url)?;
    let navigator = Arc::new(TerminalNavigator::new(&config.api_base_url));
    let services = AppServices::new_sqlite(&config, navigator).await?;
    let auth = services.auth();
    let progress = services.progress();

    match &cli.command {
        Command::Register {
            email,
            password,
            name,
        } => {
            let response = auth.register(email, password, name).await?;
            println!("registered and signed in as {}", response.user.name);
        }
        Command::Login { email, password } => {
            let response = auth.login(email, password).await?;
            println!("signed in as {}", response.user.name);
        }
        Command::OAuth { provider } => auth.login_with(*provider),
        Command::OAuthComplete => {
            let response = auth.complete_oauth().await?;
            println!("signed in as {}", response.user.name);
        }
        Command::Logout => auth.logout().await?,
        Command::WhoAmI => {
            let user = auth.current_user().await?;
            match user.email() {
                Some(email) => println!("{} <{email}> (id {})", user.name, user.id),
                None => println!("{} (id {})", user.name, user.id),
            }
        }
        Command::Dashboard => print_dashboard(&progress.dashboard().await?),
        Command::Progress { topic } => {
            let record = progress.get_progress(topic).await?;
            println!("{}", render_progress_card(&record));
        }
        Command::Module { topic, module } => {
            let record = progress.mark_module_complete(topic, module).await?;
            println!("{}", render_progress_card(&record));
        }
        Command::Quiz { topic, quiz, score } => {
            let record = progress.record_quiz_score(topic, quiz, *score).await?;
            println!("{}", render_progress_card(&record));
        }
        Command::Flashcards { topic, count } => {
            let record = progress.update_flashcard_progress(topic, *count).await?;
            println!("{}", render_progress_card(&record));
        }
        Command::Session { topic, details } => {
            let record = progress
                .create_study_session(topic, &details.draft())
                .await?;
            match record.id {
                Some(id) => println!("logged {} session {id}", record.session_type),
                None => println!("logged {} session", record.session_type),
            }
        }
    }

    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
