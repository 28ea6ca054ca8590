//! postdeck - a terminal browser for paginated, searchable remote post collections
//!
//! The library holds the list-view state machine ([`list`]), the remote
//! client ([`remote`]), the persisted display preference ([`preference`]) and
//! the TUI built on them. It is exposed for the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod logging;
pub mod models;
pub mod preference;
pub mod remote;
pub mod terminal;
pub mod traits;
pub mod ui;
