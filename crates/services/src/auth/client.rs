use std::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use study_core::model::{AuthResponse, User};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::navigation::Navigator;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, RequestOptions};

use super::SessionStore;

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const OAUTH_COMPLETE_PATH: &str = "/api/auth/oauth-complete";
const CURRENT_USER_PATH: &str = "/api/auth/me";

/// External identity providers the backend can delegate sign-in to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Microsoft,
    Apple,
}

impl OAuthProvider {
    /// Page that starts the provider's redirect dance.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Google => "/auth/google/login",
            Self::Microsoft => "/auth/microsoft/login",
            Self::Apple => "/auth/apple/login",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "google" => Some(Self::Google),
            "microsoft" => Some(Self::Microsoft),
            "apple" => Some(Self::Apple),
            _ => None,
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Google => "google",
            Self::Microsoft => "microsoft",
            Self::Apple => "apple",
        };
        f.write_str(name)
    }
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Sign-in operations plus the authenticated request wrapper.
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn HttpTransport>,
    sessions: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthClient {
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        sessions: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            sessions,
            navigator,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingField` for blank input (nothing is sent),
    /// `ApiError::Status` with the backend message on rejection, and
    /// transport, decoding or storage errors otherwise.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, ApiError> {
        require("email", email)?;
        require("password", password)?;
        require("name", name)?;
        let options = RequestOptions::post().with_json(&RegisterBody {
            email,
            password,
            name,
        })?;
        self.establish_session(REGISTER_PATH, options).await
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::register`].
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        require("email", email)?;
        require("password", password)?;
        let options = RequestOptions::post().with_json(&LoginBody { email, password })?;
        self.establish_session(LOGIN_PATH, options).await
    }

    /// Exchange the backend's pending OAuth sign-in for tokens.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::register`], minus input checks.
    pub async fn complete_oauth(&self) -> Result<AuthResponse, ApiError> {
        let options = RequestOptions::post()
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.establish_session(OAUTH_COMPLETE_PATH, options).await
    }

    /// Leave for the provider's sign-in page. Nothing comes back from this call.
    pub fn login_with(&self, provider: OAuthProvider) {
        info!(%provider, "redirecting to identity provider");
        self.navigator.go_to(provider.login_path());
    }

    pub fn login_with_google(&self) {
        self.login_with(OAuthProvider::Google);
    }

    pub fn login_with_microsoft(&self) {
        self.login_with(OAuthProvider::Microsoft);
    }

    pub fn login_with_apple(&self) {
        self.login_with(OAuthProvider::Apple);
    }

    /// Sign out locally and return to the landing page.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if stored keys could not be removed.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.sessions.clear_session().await?;
        Ok(())
    }

    /// Perform one request carrying the current bearer credential.
    ///
    /// Any caller-supplied `Authorization` header is replaced. A `401` clears
    /// the session (navigating home) and is reported as
    /// `ApiError::SessionExpired`; every other status comes back untouched.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotAuthenticated` without sending anything when no
    /// session exists, `ApiError::SessionExpired` on `401`, and
    /// `ApiError::Transport` when no response arrives.
    pub async fn fetch_with_auth(
        &self,
        path: &str,
        mut options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let bearer = self
            .sessions
            .authorization_header()
            .ok_or(ApiError::NotAuthenticated)?;
        let mut credential = HeaderValue::from_str(&bearer).map_err(|_| ApiError::InvalidToken)?;
        credential.set_sensitive(true);
        options.headers.insert(AUTHORIZATION, credential);

        let response = self.transport.send(ApiRequest::new(path, options)).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!(path, "credential rejected; signing out");
            if let Err(err) = self.sessions.clear_session().await {
                warn!(error = %err, "session storage was not fully cleared");
            }
            return Err(ApiError::SessionExpired);
        }

        Ok(response)
    }

    /// Fetch the signed-in user's record from the backend.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::fetch_with_auth`], plus `ApiError::Status` and
    /// decoding errors.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch_with_auth(CURRENT_USER_PATH, RequestOptions::get())
            .await?
            .decode()
    }

    async fn establish_session(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<AuthResponse, ApiError> {
        debug!(path, "requesting tokens");
        let response = self.transport.send(ApiRequest::new(path, options)).await?;
        let auth: AuthResponse = response.decode()?;
        self.sessions.set_session(auth.to_session()).await?;
        Ok(auth)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingField(field));
    }
    Ok(())
}
