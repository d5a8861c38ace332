use std::fmt;

use serde::{Deserialize, Serialize};

use super::User;

/// Bearer credential attached to authenticated requests.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Long-lived credential issued next to the access token. Stored, never sent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(***)")
    }
}

/// Authenticated state of the client.
///
/// Token and user only exist together; there is no way to build a `Session`
/// holding one without the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    access_token: AccessToken,
    refresh_token: Option<RefreshToken>,
    user: User,
}

impl Session {
    #[must_use]
    pub fn new(access_token: AccessToken, refresh_token: Option<RefreshToken>, user: User) -> Self {
        Self {
            access_token,
            refresh_token,
            user,
        }
    }

    #[must_use]
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }
}

/// Body of a successful register, login or OAuth completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: AccessToken,
    #[serde(default)]
    pub refresh_token: Option<RefreshToken>,
    pub user: User,
}

impl AuthResponse {
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session::new(
            self.access_token.clone(),
            self.refresh_token.clone(),
            self.user.clone(),
        )
    }
}
