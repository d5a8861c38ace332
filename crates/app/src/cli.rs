use clap::{Args, Parser, Subcommand};
use services::config::{DEFAULT_API_URL, DEFAULT_DB_URL};
use services::{ClientConfig, OAuthProvider};
use study_core::model::{ModuleId, QuizId, StudySessionDraft, StudySessionKind, TopicId};

/// Command-line client for the study companion backend.
#[derive(Parser, Debug)]
#[command(name = "study-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend origin
    #[arg(long, global = true, env = "STUDY_API_URL", default_value = DEFAULT_API_URL)]
    pub api: String,

    /// SQLite URL or path of the session database
    #[arg(
        long,
        global = true,
        env = "STUDY_DB_URL",
        default_value = DEFAULT_DB_URL,
        value_parser = parse_db_url
    )]
    pub db: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api.clone(),
            db_url: self.db.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create an account and sign in as it
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STUDY_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STUDY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the identity provider page that starts an OAuth sign-in
    #[command(name = "oauth")]
    OAuth {
        #[arg(value_parser = parse_provider, value_name = "google|microsoft|apple")]
        provider: OAuthProvider,
    },
    /// Exchange a finished OAuth sign-in for tokens
    #[command(name = "oauth-complete")]
    OAuthComplete,
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    #[command(name = "whoami")]
    WhoAmI,
    /// Progress across every topic
    Dashboard,
    /// Show progress for one topic
    Progress { topic: TopicId },
    /// Mark a module as completed
    Module { topic: TopicId, module: ModuleId },
    /// Record a quiz score
    Quiz {
        topic: TopicId,
        quiz: QuizId,
        score: f64,
    },
    /// Report reviewed flashcards
    Flashcards {
        topic: TopicId,
        /// Cards reviewed (the backend counts one when omitted)
        #[arg(long)]
        count: Option<u32>,
    },
    /// Log a finished study session
    Session {
        topic: TopicId,
        #[command(flatten)]
        details: SessionArgs,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SessionArgs {
    #[arg(long = "type", value_parser = parse_session_kind, default_value = "module")]
    pub kind: StudySessionKind,
    #[arg(long, default_value_t = 0)]
    pub minutes: u32,
    #[arg(long, default_value_t = 0)]
    pub items: u32,
    #[arg(long)]
    pub score: Option<f64>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl SessionArgs {
    #[must_use]
    pub fn draft(&self) -> StudySessionDraft {
        StudySessionDraft {
            session_type: self.kind,
            content_id: self.content.clone(),
            duration_minutes: self.minutes,
            score: self.score,
            items_completed: self.items,
            notes: self.notes.clone(),
        }
    }
}

fn parse_provider(raw: &str) -> Result<OAuthProvider, String> {
    OAuthProvider::parse(raw)
        .ok_or_else(|| format!("unknown provider {raw}; expected google, microsoft or apple"))
}

fn parse_session_kind(raw: &str) -> Result<StudySessionKind, String> {
    StudySessionKind::parse(raw)
        .ok_or_else(|| format!("unknown session type {raw}; expected module, quiz or flashcard"))
}

fn parse_db_url(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("database url must not be blank".into());
    }
    Ok(normalize_sqlite_url(raw.to_owned()))
}

pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}
