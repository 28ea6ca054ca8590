//! Fixed ambient hint.

use crate::traits::AmbientHint;

/// Ambient hint returning a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHint(pub Option<bool>);

impl AmbientHint for FixedHint {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
