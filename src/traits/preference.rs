//! Preference persistence and ambient hint abstractions.

/// Key/value storage backing the preference store.
///
/// Deliberately synchronous: a toggle persists before it returns. Failures are
/// reported as `false` and never surface to the user; the value then simply
/// does not survive a restart.
pub trait PreferenceBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. Returns `true` on success.
    fn write(&self, key: &str, value: &str) -> bool;
}

/// Read-only environment signal consulted when nothing is persisted.
pub trait AmbientHint: Send + Sync {
    /// `Some(true)` if the environment prefers a dark display, `None` when it
    /// says nothing either way.
    fn prefers_dark(&self) -> Option<bool>;
}
