//! Persisted display-mode preference.
//!
//! [`PreferenceStore`] is created once at startup and passed by reference to
//! whatever needs it. Its only mutation is [`PreferenceStore::toggle`], which
//! persists the new value and republishes the derived [`Theme`] before
//! returning.

mod store;
mod theme;

pub use store::{PreferenceStore, THEME_KEY};
pub use theme::Theme;
