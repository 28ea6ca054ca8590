//! Concrete implementations of the trait seams in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FilePreferenceBackend`] - JSON file under `~/.postdeck`
//! - [`InMemoryPreferences`] - Process-lifetime storage, used when there is no home directory
//! - [`TerminalHint`] - "prefers dark" derived from the terminal environment
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::FixedHint`] - Ambient hint with a fixed answer

pub mod env_hint;
pub mod file_preferences;
pub mod memory_preferences;
pub mod mock;
pub mod reqwest_http;

pub use env_hint::TerminalHint;
pub use file_preferences::FilePreferenceBackend;
pub use memory_preferences::InMemoryPreferences;
pub use mock::{FixedHint, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
