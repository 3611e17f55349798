use backon::ExponentialBuilder;
use reqwest::Method;
use std::time::Duration;

/// Maximum number of retries after the first attempt
pub const MAX_RETRIES: usize = 3;

/// Creates the default exponential backoff builder for Tesla API requests
///
/// Configured with:
/// - Initial interval: 500ms
/// - Factor: 2.0 (500ms, 1s, 2s)
/// - Max times: 3
#[must_use]
pub fn default_backoff_builder() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(500))
        .with_max_delay(Duration::from_secs(4))
        .with_max_times(MAX_RETRIES)
        .with_factor(2.0)
}

/// Determines if an HTTP status code should trigger a retry
///
/// Retries on: 429, 500, 502, 503, 504
#[must_use]
pub const fn is_retryable_status(code: u16) -> bool {
    matches!(code, 429 | 500 | 502 | 503 | 504)
}

/// Methods the client issues and retries
#[must_use]
pub fn is_retryable_method(method: &Method) -> bool {
    *method == Method::GET || *method == Method::POST || *method == Method::DELETE
}
