use tokio::sync::watch;

use super::theme::Theme;
use crate::traits::{AmbientHint, PreferenceBackend};

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Process-wide dark-mode flag with persistence and a derived theme.
///
/// Persistence failures are logged and otherwise ignored: the value keeps
/// working for this process and is simply lost on restart.
pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    dark_mode: bool,
    theme_tx: watch::Sender<Theme>,
}

impl PreferenceStore {
    /// Initial value: persisted value, else the ambient hint, else `false`.
    ///
    /// Any non-empty persisted value other than `"dark"` reads as light.
    /// Nothing is written during construction.
    pub fn load(backend: Box<dyn PreferenceBackend>, hint: &dyn AmbientHint) -> Self {
        let persisted = backend.read(THEME_KEY).filter(|v| !v.is_empty());
        let dark_mode = match persisted {
            Some(value) => value == Theme::Dark.as_str(),
            None => hint.prefers_dark().unwrap_or(false),
        };
        tracing::debug!(dark_mode, "Loaded display preference");

        let (theme_tx, _) = watch::channel(Theme::from_dark_mode(dark_mode));
        Self {
            backend,
            dark_mode,
            theme_tx,
        }
    }

    pub fn get(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Receiver that observes every theme change.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme_tx.subscribe()
    }

    /// Flip the flag, persist it and republish the theme. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        let theme = self.theme();

        if !self.backend.write(THEME_KEY, theme.as_str()) {
            tracing::warn!(theme = %theme, "Display preference not persisted");
        }
        self.theme_tx.send_replace(theme);

        tracing::info!(theme = %theme, "Display preference toggled");
        self.dark_mode
    }
}
