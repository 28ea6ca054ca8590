//! Trait seams for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the remote collection
//! - [`ItemSource`] - typed access to items, used by the controllers
//! - [`PreferenceBackend`] - persisted key/value storage for the theme
//! - [`AmbientHint`] - read-only "prefers dark" signal from the environment

pub mod http;
pub mod preference;
pub mod source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use preference::{AmbientHint, PreferenceBackend};
pub use source::ItemSource;
