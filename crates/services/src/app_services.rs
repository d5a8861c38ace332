use std::sync::Arc;

use storage::repository::Storage;

use crate::auth::{AuthClient, SessionStore};
use crate::config::ClientConfig;
use crate::error::AppServicesError;
use crate::navigation::Navigator;
use crate::progress::ProgressTracker;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Assembles the session store and every service that depends on it.
///
/// Built once per process; the same `SessionStore` is shared by all services.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<SessionStore>,
    auth: Arc<AuthClient>,
    progress: Arc<ProgressTracker>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage cannot be opened or read, or if
    /// the configured API URL is invalid.
    pub async fn new_sqlite(
        config: &ClientConfig,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppServicesError> {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new(&config.api_base_url)?);
        let storage = Storage::sqlite(&config.db_url).await?;
        Self::assemble(transport, storage, navigator).await
    }

    /// Wire services around an existing transport and storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the persisted session cannot be read.
    pub async fn assemble(
        transport: Arc<dyn HttpTransport>,
        storage: Storage,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppServicesError> {
        let sessions =
            Arc::new(SessionStore::load(Arc::clone(&storage.items), Arc::clone(&navigator)).await?);
        let auth = Arc::new(AuthClient::new(transport, Arc::clone(&sessions), navigator));
        let progress = Arc::new(ProgressTracker::new(Arc::clone(&auth)));

        Ok(Self {
            sessions,
            auth,
            progress,
        })
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionStore> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthClient> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.progress)
    }
}
