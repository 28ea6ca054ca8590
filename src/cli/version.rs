//! Version and help output.

use super::args::USAGE;

/// The current version of postdeck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("postdeck {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("postdeck {}\n\n{}", VERSION, USAGE);
    std::process::exit(0)
}
