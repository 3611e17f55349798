use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when using the Tesla API client
#[derive(Debug, Error)]
pub enum TeslaError {
    /// Upstream answered non-2xx, or the transport failed after retries
    #[error("{0}")]
    Api(ApiError),

    /// Local configuration or request-building failure
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Structured upstream failure
///
/// `status_code` is `None` only for transport failures (connect, timeout)
/// that outlived the retry budget.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message, preferring the upstream `error` field
    pub message: String,
    /// HTTP status code, if a response was received
    pub status_code: Option<u16>,
    /// Decoded JSON error body, if the body was JSON
    pub payload: Option<Value>,
    #[source]
    transport: Option<reqwest::Error>,
}

/// Coarse classification of an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401 Unauthorized
    Unauthorized,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 429 Too Many Requests
    RateLimited,
    /// Other 4xx errors
    ClientError,
    /// 5xx errors
    ServerError,
    /// No response was received
    Network,
}

impl ApiError {
    /// Builds an error from a transport failure
    ///
    /// The request URL is dropped from the error, since its query string
    /// carries the bypass value.
    #[must_use]
    pub fn transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        Self {
            message: err.to_string(),
            status_code: err.status().map(|s| s.as_u16()),
            payload: None,
            transport: Some(err),
        }
    }

    /// Classifies the error by status code
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.status_code {
            None => ErrorKind::Network,
            Some(401) => ErrorKind::Unauthorized,
            Some(403) => ErrorKind::Forbidden,
            Some(404) => ErrorKind::NotFound,
            Some(429) => ErrorKind::RateLimited,
            Some(500..=599) => ErrorKind::ServerError,
            Some(_) => ErrorKind::ClientError,
        }
    }

    fn is_retryable(&self) -> bool {
        match (&self.transport, self.status_code) {
            (_, Some(code)) => crate::retry::is_retryable_status(code),
            (Some(e), None) => e.is_timeout() || e.is_connect() || e.is_request(),
            (None, None) => false,
        }
    }
}

impl TeslaError {
    /// Determines if this error is retryable
    ///
    /// Retryable errors are 429, 500, 502, 503, 504 and connection-level
    /// failures (connect, timeout, send).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            Self::Config(_) => false,
        }
    }

    /// HTTP status code, if the upstream answered
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status_code,
            Self::Config(_) => None,
        }
    }

    /// Message suitable for surfacing to a tool caller
    ///
    /// Rendered as `Tesla API error (status 401): invalid bearer token`, with
    /// the status part omitted when no response was received.
    #[must_use]
    pub fn caller_message(&self) -> String {
        match self.status_code() {
            Some(code) => format!("Tesla API error (status {code}): {self}"),
            None => format!("Tesla API error: {self}"),
        }
    }
}

impl From<reqwest::Error> for TeslaError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            return Self::Config(e.without_url().to_string());
        }
        Self::Api(ApiError::transport(e))
    }
}

impl From<ApiError> for TeslaError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn status_description(status: StatusCode) -> String {
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    )
}

/// Builds the error for a non-2xx response
///
/// The message is the body's `error` field when present and non-empty,
/// otherwise a generic status description. The body is kept as `payload`
/// when it decodes as JSON.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> TeslaError {
    let payload = serde_json::from_slice::<Value>(body).ok();

    let message = match payload.as_ref().and_then(|p| p.get("error")) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(v) if is_truthy(v) => v.to_string(),
        _ => status_description(status),
    };

    TeslaError::Api(ApiError {
        message,
        status_code: Some(status.as_u16()),
        payload,
        transport: None,
    })
}
