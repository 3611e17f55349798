//! Helpers for tests that read `TESLA_BASE_URL` and `TESLA_BYPASS`.
//!
//! Every test touching these variables must run under `#[serial(env)]`.

use crate::config::{ENV_BASE_URL, ENV_BYPASS};

/// Restores one environment variable to its prior value on drop
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Sets `key` to `val` until the guard is dropped
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Unsets `key` until the guard is dropped
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }

    fn apply(key: &'static str, val: Option<&str>) -> Self {
        match val {
            Some(v) => Self::set(key, v),
            None => Self::remove(key),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: the guard lives inside a `#[serial(env)]` test.
        match &self.prev {
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Pins both Tesla variables for the duration of a test
///
/// `None` unsets the variable, so a developer's shell cannot leak into the
/// result.
pub struct TeslaEnv {
    _base: EnvGuard,
    _bypass: EnvGuard,
}

impl TeslaEnv {
    /// Sets or clears `TESLA_BASE_URL` and `TESLA_BYPASS`
    #[must_use]
    pub fn new(base_url: Option<&str>, bypass: Option<&str>) -> Self {
        Self {
            _base: EnvGuard::apply(ENV_BASE_URL, base_url),
            _bypass: EnvGuard::apply(ENV_BYPASS, bypass),
        }
    }

    /// Clears both variables
    #[must_use]
    pub fn cleared() -> Self {
        Self::new(None, None)
    }
}
