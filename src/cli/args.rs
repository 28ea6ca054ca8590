//! Command-line argument parsing.

use crate::config::{parse_number, Config};
use crate::error::ConfigError;

pub const USAGE: &str = "\
Usage: postdeck [OPTIONS]

Options:
  --base-url <URL>     Remote API root (env: POSTDECK_BASE_URL)
  --page-size <N>      Items per page (env: POSTDECK_PAGE_SIZE)
  -V, --version        Print version and exit
  -h, --help           Print this help and exit

Keys:
  left/right, h/l   previous/next page
  /                 search, Enter to submit, Esc to clear
  up/down, j/k      move selection
  d                 item details
  r                 refresh
  t                 toggle dark mode
  q                 quit";

/// Values given on the command line, applied on top of the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub page_size: Option<u64>,
}

impl CliOverrides {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(CliOverrides),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use postdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--base-url" => {
                let url = args.next().ok_or(ConfigError::MissingValue("--base-url"))?;
                overrides.base_url = Some(url);
            }
            "--page-size" => {
                let size = args.next().ok_or(ConfigError::MissingValue("--page-size"))?;
                overrides.page_size = Some(parse_number("--page-size", &size)?);
            }
            other => {
                if let Some(url) = other.strip_prefix("--base-url=") {
                    overrides.base_url = Some(url.to_string());
                } else if let Some(size) = other.strip_prefix("--page-size=") {
                    overrides.page_size = Some(parse_number("--page-size", size)?);
                }
            }
        }
    }

    Ok(CliCommand::Run(overrides))
}
