//! CLI module for postdeck.
//!
//! Handles command-line flags before the TUI starts:
//!
//! ```ignore
//! use postdeck::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => handle_version_command(),
//!     CliCommand::Help => handle_help_command(),
//!     CliCommand::Run(overrides) => { /* start the TUI */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, USAGE};
pub use version::{handle_help_command, handle_version_command, VERSION};
