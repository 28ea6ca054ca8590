//! Ambient "prefers dark" hint read from the terminal environment.
//!
//! Sources, in order:
//! 1. `POSTDECK_PREFERS_DARK` (`1`/`true`/`yes` or `0`/`false`/`no`)
//! 2. `COLORFGBG`, set by rxvt, Konsole, iTerm2 and others as `fg;bg`
//!    (sometimes `fg;default;bg`). A background of 0–6 or 8 is dark.

use crate::traits::AmbientHint;

pub const OVERRIDE_VAR: &str = "POSTDECK_PREFERS_DARK";
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Reads the hint from process environment variables on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHint;

impl TerminalHint {
    pub fn new() -> Self {
        Self
    }
}

impl AmbientHint for TerminalHint {
    fn prefers_dark(&self) -> Option<bool> {
        if let Ok(value) = std::env::var(OVERRIDE_VAR) {
            if let Some(flag) = parse_flag(&value) {
                return Some(flag);
            }
        }

        std::env::var(COLORFGBG_VAR)
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "dark" => Some(true),
        "0" | "false" | "no" | "light" => Some(false),
        _ => None,
    }
}

/// Interpret a `COLORFGBG` value. The background is the last field.
pub(crate) fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg = value.rsplit(';').next()?.trim();
    let bg: u8 = bg.parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
