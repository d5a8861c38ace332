use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, TransportError};

/// Method, headers and JSON body of an outgoing request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    /// Attach `body` as the JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A request as handed to an `HttpTransport`.
///
/// `path` is absolute from the backend origin, e.g. `/api/auth/login`.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Builds the request, defaulting `Content-Type` to JSON when a body is present.
    #[must_use]
    pub fn new(path: impl Into<String>, options: RequestOptions) -> Self {
        let RequestOptions {
            method,
            mut headers,
            body,
        } = options;
        if body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Self {
            method,
            path: path.into(),
            headers,
            body,
        }
    }
}

/// Raw backend response. The body is left undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON, regardless of status.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Decode a successful body as `T`, or turn a failed one into `ApiError::Status`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success statuses, carrying the backend's
    /// `error` message (or a generic one), and `ApiError::Json` for undecodable bodies.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status {
                status: self.status,
                message: self.error_message(),
            });
        }
        Ok(self.json()?)
    }

    fn error_message(&self) -> String {
        self.json::<Value>()
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_owned))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", self.status.as_u16()))
    }
}

/// One network round trip. Implementations never retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return whatever the backend answered.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` only when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `reqwest`-backed transport resolving request paths against a base URL.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns `TransportError::Url` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.base_url.join(&request.path)?;
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(TransportError::from_send)?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), "received response");
        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
