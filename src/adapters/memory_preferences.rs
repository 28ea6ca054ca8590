//! Preference storage that lives only as long as the process.
//!
//! Used when there is no home directory to hold `preferences.json`, and by
//! tests that need to see what was written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::PreferenceBackend;

#[derive(Debug, Default)]
struct Slots {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
    fail_writes: bool,
}

/// Preference storage held in memory.
///
/// Clones share state, so a caller can keep a handle after moving one into a
/// store and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    slots: Arc<Mutex<Slots>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `key = value`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.slots().values.insert(key.to_string(), value.to_string());
        prefs
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.slots().writes.clone()
    }

    /// Make subsequent writes fail, as an unwritable disk would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.slots().fail_writes = fail;
    }

    // Every update is a single insert or push, so a poisoned lock still
    // guards consistent data.
    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceBackend for InMemoryPreferences {
    fn read(&self, key: &str) -> Option<String> {
        self.slots().values.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        let mut slots = self.slots();
        if slots.fail_writes {
            return false;
        }
        slots.values.insert(key.to_string(), value.to_string());
        slots.writes.push((key.to_string(), value.to_string()));
        true
    }
}
