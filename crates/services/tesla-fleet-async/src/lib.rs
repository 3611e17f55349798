#![warn(missing_docs)]

//! Async client for the Tesla Fleet API and the TeslaMate API.
//!
//! Every operation takes the caller's bearer token, performs one HTTP call
//! with bounded retries, and returns the decoded [`Payload`] or a structured
//! [`TeslaError`].
//!
//! ```no_run
//! # async fn run() -> Result<(), tesla_fleet_async::TeslaError> {
//! let client = tesla_fleet_async::Client::from_env()?;
//! let products = client.vehicles().products("my-token").await?;
//! let locked = client.commands().door_lock("5YJ3E1EA7KF000000", "my-token").await?;
//! # let _ = (products, locked);
//! # Ok(())
//! # }
//! ```

/// HTTP client core
pub mod client;
/// Configuration types for the client
pub mod config;
/// Per-call request context
pub mod context;
/// Error types
pub mod error;
/// Decoded response bodies
pub mod payload;
/// API resource implementations
pub mod resources;
/// Retry logic utilities
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request bodies and query strings
pub mod types;

pub use crate::client::Client;
pub use crate::config::TeslaConfig;
pub use crate::context::RequestContext;
pub use crate::error::{ApiError, ErrorKind, TeslaError};
pub use crate::payload::Payload;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, Payload, TeslaConfig, TeslaError};
}
