/// Backend origin used when neither `--api` nor `STUDY_API_URL` is given.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
/// Session database used when neither `--db` nor `STUDY_DB_URL` is given.
pub const DEFAULT_DB_URL: &str = "sqlite://study-client.sqlite3";

/// Where the backend lives and where the session is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub db_url: String,
}
