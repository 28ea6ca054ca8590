//! Error types for postdeck.
//!
//! - [`FetchError`]: everything that can go wrong talking to the remote
//!   collection. Propagated unchanged from the client to the controllers.
//! - [`ConfigError`]: invalid configuration, reported before anything starts.
//!
//! The binary wraps both in `color_eyre::Report` at the top level.

mod config;
mod fetch;

pub use config::ConfigError;
pub use fetch::FetchError;

/// Result alias for remote operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
