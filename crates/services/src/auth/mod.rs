mod client;
pub(crate) mod session_store;

// Public API of the authentication subsystem.
pub use client::{AuthClient, OAuthProvider};
pub use session_store::{
    ACCESS_TOKEN_KEY, LANDING_PATH, REFRESH_TOKEN_KEY, SessionStore, USER_KEY,
};
