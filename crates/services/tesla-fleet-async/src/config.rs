use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::context::RequestContext;

/// Default Tesla API base URL
pub const TESLA_DEFAULT_BASE: &str = "https://api.myteslamate.com";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "TESLA_BASE_URL";
/// Environment variable carrying the operator bypass value
pub const ENV_BYPASS: &str = "TESLA_BYPASS";
/// Query parameter name the bypass value is sent under
pub const QUERY_BYPASS: &str = "bypass";
/// User agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str = "Tesla-MCP/1.0";
/// Per-request timeout, including retried attempts individually
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// TCP connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-level configuration for the Tesla client
///
/// Resolved once (usually from the environment) and threaded explicitly into
/// the [`Client`](crate::Client). Debug output redacts the bypass value via
/// [`SecretString`].
#[derive(Clone, Debug)]
pub struct TeslaConfig {
    api_base: String,
    bypass: Option<SecretString>,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for TeslaConfig {
    fn default() -> Self {
        let api_base = env_non_empty(ENV_BASE_URL).unwrap_or_else(|| TESLA_DEFAULT_BASE.into());
        let bypass = env_non_empty(ENV_BYPASS).map(SecretString::from);

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            bypass,
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl TeslaConfig {
    /// Creates a configuration from the process environment
    ///
    /// Reads:
    /// - `TESLA_BASE_URL` for the API base URL (defaults to `https://api.myteslamate.com`)
    /// - `TESLA_BYPASS` for the optional bypass query value
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the bypass value appended as `bypass=<value>` to every request
    #[must_use]
    pub fn with_bypass(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.bypass = if value.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(value))
        };
        self
    }

    /// Clears any bypass value picked up from the environment
    #[must_use]
    pub fn without_bypass(mut self) -> Self {
        self.bypass = None;
        self
    }

    /// Sets the `User-Agent` header value
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the configured API base URL (no trailing slash)
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the configured user agent
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns true if a bypass value is configured
    #[must_use]
    pub const fn has_bypass(&self) -> bool {
        self.bypass.is_some()
    }

    /// Extra query parameters attached to every request
    #[must_use]
    pub fn query(&self) -> Vec<(&str, &str)> {
        self.bypass
            .as_ref()
            .map(|b| vec![(QUERY_BYPASS, b.expose_secret())])
            .unwrap_or_default()
    }

    /// Builds a request context for `token` against the configured base URL
    #[must_use]
    pub fn context(&self, token: &str) -> RequestContext {
        RequestContext::new(token, &self.api_base)
    }
}
