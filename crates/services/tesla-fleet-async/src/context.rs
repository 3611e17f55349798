use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::error::TeslaError;

/// Per-call pairing of a bearer token and the base URL it targets
///
/// Built fresh for every operation and dropped once the call completes.
/// Debug output redacts the token via [`SecretString`].
#[derive(Clone, Debug)]
pub struct RequestContext {
    bearer_token: SecretString,
    base_url: String,
}

impl RequestContext {
    /// Creates a context; trailing slashes on `base_url` are stripped
    #[must_use]
    pub fn new(bearer_token: &str, base_url: &str) -> Self {
        Self {
            bearer_token: SecretString::from(bearer_token.to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL (never ends in `/`)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one slash between them
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    /// Headers sent with every request made under this context
    ///
    /// # Errors
    ///
    /// Returns [`TeslaError::Config`] if the token or user agent contain
    /// characters that are not valid in a header value.
    pub fn headers(&self, user_agent: &str) -> Result<HeaderMap, TeslaError> {
        let mut h = HeaderMap::new();

        let bearer = format!("Bearer {}", self.bearer_token.expose_secret());
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|_| TeslaError::Config("Invalid bearer token value".into()))?;
        auth.set_sensitive(true);
        h.insert(AUTHORIZATION, auth);

        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|_| TeslaError::Config("Invalid user agent value".into()))?,
        );

        Ok(h)
    }
}
