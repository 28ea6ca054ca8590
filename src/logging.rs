//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so log lines go to
//! `~/.postdeck/postdeck.log`. The filter comes from [`Config::log_filter`]
//! (`POSTDECK_LOG`) and accepts any `EnvFilter` directive.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

const LOG_DIR: &str = ".postdeck";
const LOG_FILE: &str = "postdeck.log";

/// Default log file location, `None` without a home directory.
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOG_DIR).join(LOG_FILE))
}

/// Install the global subscriber.
///
/// Safe to call more than once; only the first call takes effect. Returns the
/// log file path when logging was set up. Logging is optional: an unwritable
/// directory leaves the process running without a subscriber.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}
