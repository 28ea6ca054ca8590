//! Published state of the list.

use crate::error::FetchError;
use crate::models::Item;

/// Lifecycle of the list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// The latest fetch has not settled
    Loading,
    /// The latest fetch succeeded
    Loaded,
    /// The latest fetch failed
    Errored,
}

/// What the renderer shows.
///
/// `items` is only ever replaced wholesale by a successful fetch. While
/// Loading or Errored it still holds the last successful result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListResult {
    pub status: FetchStatus,
    pub items: Vec<Item>,
    /// User-facing message, set only while Errored
    pub error_message: Option<String>,
    /// The underlying failure behind `error_message`
    pub error: Option<FetchError>,
}

impl ListResult {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_errored(&self) -> bool {
        self.status == FetchStatus::Errored
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = FetchStatus::Loading;
        self.error_message = None;
        self.error = None;
    }

    pub(crate) fn loaded(&mut self, items: Vec<Item>) {
        self.status = FetchStatus::Loaded;
        self.items = items;
        self.error_message = None;
        self.error = None;
    }

    pub(crate) fn errored(&mut self, message: &str, error: FetchError) {
        self.status = FetchStatus::Errored;
        self.error_message = Some(message.to_string());
        self.error = Some(error);
    }
}
