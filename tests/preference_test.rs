//! PreferenceStore over the in-memory and file backends.

use postdeck::adapters::{FilePreferenceBackend, FixedHint, InMemoryPreferences};
use postdeck::preference::{PreferenceStore, Theme, THEME_KEY};
use postdeck::traits::PreferenceBackend;
use tempfile::TempDir;

#[test]
fn test_double_toggle_round_trips_and_persists_twice() {
    let prefs = InMemoryPreferences::with_value(THEME_KEY, "dark");
    let mut store = PreferenceStore::load(Box::new(prefs.clone()), &FixedHint(Some(false)));
    assert!(store.get());

    store.toggle();
    store.toggle();

    assert!(store.get());
    assert_eq!(
        prefs.writes(),
        vec![
            (THEME_KEY.to_string(), "light".to_string()),
            (THEME_KEY.to_string(), "dark".to_string()),
        ]
    );
}

#[test]
fn test_hint_used_only_without_persisted_value() {
    let prefs = InMemoryPreferences::new();
    let store = PreferenceStore::load(Box::new(prefs.clone()), &FixedHint(Some(true)));
    assert!(store.get());
    assert_eq!(store.theme(), Theme::Dark);
    // Loading never writes
    assert!(prefs.writes().is_empty());

    let store = PreferenceStore::load(Box::new(InMemoryPreferences::new()), &FixedHint(None));
    assert!(!store.get());
}

#[test]
fn test_failed_persistence_is_not_an_error() {
    let prefs = InMemoryPreferences::new();
    prefs.set_fail_writes(true);
    let mut store = PreferenceStore::load(Box::new(prefs.clone()), &FixedHint(None));

    assert!(store.toggle());
    assert!(store.get());
    assert_eq!(prefs.read(THEME_KEY), None);
}

#[test]
fn test_subscribers_see_each_toggle() {
    let mut store = PreferenceStore::load(Box::new(InMemoryPreferences::new()), &FixedHint(None));
    let mut rx = store.subscribe();
    assert_eq!(*rx.borrow_and_update(), Theme::Light);

    store.toggle();
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), Theme::Dark);
}

#[test]
fn test_file_backend_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let mut store = PreferenceStore::load(Box::new(FilePreferenceBackend::at(&path)), &FixedHint(None));
    store.toggle();
    assert!(path.exists());

    // A later process reads the persisted value and ignores the hint
    let store = PreferenceStore::load(Box::new(FilePreferenceBackend::at(&path)), &FixedHint(Some(false)));
    assert!(store.get());

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["theme"], "dark");
}
