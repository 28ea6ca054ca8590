//! File-backed preference storage.
//!
//! Preferences live in `~/.postdeck/preferences.json` as a flat JSON object of
//! string values, e.g. `{"theme": "dark"}`.

use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::PreferenceBackend;

/// The preferences directory name.
const PREFERENCES_DIR: &str = ".postdeck";

/// The preferences file name.
const PREFERENCES_FILE: &str = "preferences.json";

/// Preference storage in a JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferenceBackend {
    path: PathBuf,
}

impl FilePreferenceBackend {
    /// Backend at the default location.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::at(home.join(PREFERENCES_DIR).join(PREFERENCES_FILE)))
    }

    /// Backend at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole object. Missing or unreadable files read as empty.
    fn load(&self) -> Map<String, Value> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Map::new(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(path = %self.path.display(), "Ignoring malformed preferences file");
                Map::new()
            }
        }
    }

    fn store(&self, map: &Map<String, Value>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, map)?;
        writer.flush()
    }
}

impl PreferenceBackend for FilePreferenceBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.load()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn write(&self, key: &str, value: &str) -> bool {
        let mut map = self.load();
        map.insert(key.to_string(), Value::String(value.to_string()));
        match self.store(&map) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to persist preferences"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_backend(temp_dir: &TempDir) -> FilePreferenceBackend {
        FilePreferenceBackend::at(temp_dir.path().join(PREFERENCES_DIR).join(PREFERENCES_FILE))
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let backend = create_test_backend(&temp_dir);
        assert_eq!(backend.read("theme"), None);
    }

    #[test]
    fn test_write_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let backend = create_test_backend(&temp_dir);

        assert!(backend.write("theme", "dark"));
        assert!(backend.path().exists());
        assert_eq!(backend.read("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_write_preserves_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let backend = create_test_backend(&temp_dir);

        backend.write("density", "compact");
        backend.write("theme", "light");

        assert_eq!(backend.read("density"), Some("compact".to_string()));
        assert_eq!(backend.read("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let backend = create_test_backend(&temp_dir);
        fs::create_dir_all(backend.path().parent().unwrap()).unwrap();
        fs::write(backend.path(), "[1, 2, 3]").unwrap();

        assert_eq!(backend.read("theme"), None);
        assert!(backend.write("theme", "dark"));
        assert_eq!(backend.read("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_non_string_value_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let backend = create_test_backend(&temp_dir);
        fs::create_dir_all(backend.path().parent().unwrap()).unwrap();
        fs::write(backend.path(), r#"{"theme": true}"#).unwrap();

        assert_eq!(backend.read("theme"), None);
    }
}
