//! Typed client for the remote item collection.
//!
//! The remote exposes a plain REST collection with window parameters and no
//! server-side search, so [`RemoteListClient::search_all`] downloads the whole
//! collection and filters it locally.

mod client;
mod endpoints;
mod search;

pub use client::RemoteListClient;
pub use endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use search::filter_items;
