use std::fmt;

/// Sequence number stamped on each fetch trigger.
///
/// Epoch 0 means "nothing requested yet"; the first fetch runs as epoch 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    pub fn value(self) -> u64 {
        self.0
    }

    /// Move to the next epoch and return it.
    pub(crate) fn advance(&mut self) -> Epoch {
        self.0 = self.0.saturating_add(1);
        *self
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
