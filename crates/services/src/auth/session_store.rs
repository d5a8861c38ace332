use std::sync::{Arc, PoisonError, RwLock};

use storage::repository::{KeyValueStore, StorageError};
use study_core::model::{AccessToken, RefreshToken, Session, User};
use tracing::{info, warn};

use crate::navigation::Navigator;

/// Storage key of the raw access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the raw refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key of the JSON-serialized user record.
pub const USER_KEY: &str = "user";
/// Where the client lands after signing out.
pub const LANDING_PATH: &str = "/";

/// Single source of truth for the current authentication state.
///
/// The in-memory copy is read synchronously; every mutation is written
/// through to the durable `KeyValueStore`.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Rebuild the session persisted in `storage`.
    ///
    /// A missing token, a missing user, or a user record that no longer
    /// decodes all yield an empty session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the storage backend itself fails.
    pub async fn load(
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, StorageError> {
        let current = read_persisted(storage.as_ref()).await?;
        Ok(Self {
            storage,
            navigator,
            current: RwLock::new(current),
        })
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(Option::is_some)
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.read(Clone::clone)
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read(|current| current.as_ref().map(|s| s.user().clone()))
    }

    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.read(|current| current.as_ref().map(|s| s.access_token().clone()))
    }

    /// `Bearer <token>` for the current session, or `None` when signed out.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.access_token().map(|token| token.bearer())
    }

    /// Replace the session in memory and in durable storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any key cannot be written. The in-memory
    /// session is already replaced at that point.
    pub async fn set_session(&self, session: Session) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(session.user())
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let user_id = session.user().id;
        let access_token = session.access_token().as_str().to_owned();
        let refresh_token = session.refresh_token().map(|t| t.as_str().to_owned());

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);

        self.storage
            .set_item(ACCESS_TOKEN_KEY, &access_token)
            .await?;
        match refresh_token {
            Some(token) => self.storage.set_item(REFRESH_TOKEN_KEY, &token).await?,
            None => self.storage.remove_item(REFRESH_TOKEN_KEY).await?,
        }
        self.storage.set_item(USER_KEY, &user_json).await?;

        info!(%user_id, "session stored");
        Ok(())
    }

    /// Forget the session everywhere and send the user back to the landing page.
    ///
    /// Navigation happens exactly once, even when a storage removal fails.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` hit while removing keys.
    pub async fn clear_session(&self) -> Result<(), StorageError> {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;

        let mut first_error = None;
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove_item(key).await {
                warn!(key, error = %err, "failed to remove session key");
                first_error.get_or_insert(err);
            }
        }

        info!("session cleared");
        self.navigator.go_to(LANDING_PATH);

        first_error.map_or(Ok(()), Err)
    }

    fn read<T>(&self, f: impl FnOnce(&Option<Session>) -> T) -> T {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

async fn read_persisted(storage: &dyn KeyValueStore) -> Result<Option<Session>, StorageError> {
    let Some(token) = storage
        .get_item(ACCESS_TOKEN_KEY)
        .await?
        .filter(|token| !token.is_empty())
    else {
        return Ok(None);
    };

    let Some(raw_user) = storage.get_item(USER_KEY).await? else {
        warn!("stored access token has no user record; starting signed out");
        return Ok(None);
    };

    let user = match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => user,
        Err(err) => {
            warn!(error = %err, "stored user record is unreadable; starting signed out");
            return Ok(None);
        }
    };

    let refresh_token = storage
        .get_item(REFRESH_TOKEN_KEY)
        .await?
        .map(RefreshToken::new);

    Ok(Some(Session::new(AccessToken::new(token), refresh_token, user)))
}
