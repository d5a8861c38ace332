#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod transport;

#[cfg(test)]
mod test_harness;

pub use app_services::AppServices;
pub use auth::{AuthClient, OAuthProvider, SessionStore};
pub use config::ClientConfig;
pub use error::{ApiError, AppServicesError, TransportError};
pub use navigation::{Navigator, RecordingNavigator};
pub use progress::ProgressTracker;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport, RequestOptions};
