//! Mock implementations for testing.
//!
//! These allow unit testing without network access or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`FixedHint`] - Ambient hint with a fixed answer

pub mod http;
pub mod preferences;

pub use http::{MockHttpClient, MockResponse};
pub use preferences::FixedHint;
