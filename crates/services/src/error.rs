//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Failures of the underlying network call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Connection failures and timeouts mean the backend never saw the request.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

/// Errors emitted by `AuthClient` and `ProgressTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The backend rejected the stored credential; the session has been cleared.
    #[error("Session expired. Please login again.")]
    SessionExpired,
    /// No access token is stored, so no request was sent.
    #[error("not signed in")]
    NotAuthenticated,
    #[error("stored access token cannot be sent as a header")]
    InvalidToken,
    /// Non-success response; `message` is the backend's `error` field when present.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// HTTP status of a backend rejection, if this error is one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::SessionExpired => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
