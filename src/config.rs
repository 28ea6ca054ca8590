//! Runtime configuration.
//!
//! Built from defaults, then environment variables, then command-line flags.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `POSTDECK_BASE_URL` | Remote API root | JSONPlaceholder |
//! | `POSTDECK_PAGE_SIZE` | Items per page | 10 |
//! | `POSTDECK_TIMEOUT_SECS` | Per-request timeout | none |
//! | `POSTDECK_LOG` | `tracing` filter directive | `info` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::remote::Endpoints;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_BASE_URL: &str = "POSTDECK_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "POSTDECK_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "POSTDECK_TIMEOUT_SECS";
pub const ENV_LOG: &str = "POSTDECK_LOG";

/// Everything the application needs to start.
///
/// # Example
///
/// ```
/// use postdeck::config::Config;
///
/// let config = Config::default()
///     .with_base_url("http://localhost:3000")
///     .with_page_size(25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoints: Endpoints,
    pub page_size: u64,
    /// `None` waits forever; a hung request then leaves the list Loading
    pub request_timeout: Option<Duration>,
    pub log_filter: String,
    /// Overrides `~/.postdeck/preferences.json`
    pub preferences_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            preferences_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_lookup(|name| std::env::var(name).ok())
    }

    /// Overlay values from `lookup` (an environment stand-in).
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.endpoints.base_url = url;
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            self.page_size = parse_number(ENV_PAGE_SIZE, &size)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_number(ENV_TIMEOUT_SECS, &secs)?;
            self.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.endpoints.base_url = base_url.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.endpoints.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }
}

pub(crate) fn parse_number(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
