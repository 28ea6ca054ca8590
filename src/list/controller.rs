//! The list-view controller.

use std::sync::Arc;

use super::epoch::Epoch;
use super::messages::{message_channel, MessageReceiver, MessageSender, ViewMessage};
use super::query::{FetchRequest, ListMode, ListQuery};
use super::result::{FetchStatus, ListResult};
use crate::error::FetchResult;
use crate::models::Item;
use crate::traits::ItemSource;

/// Shown when a page fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch posts. Please try again later.";

/// Shown when a search fails.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to search posts. Please try again later.";

/// State machine over `{Idle, Loading, Loaded, Errored} × {Paginated, Search}`.
///
/// Triggers (`set_page`, `submit_search`, `clear_search`, `refresh`) are plain
/// method calls. Each one advances the epoch, flips the result to Loading and
/// spawns the fetch. Nothing is coalesced or cancelled: older fetches keep
/// running and their messages are dropped in [`handle_message`] because their
/// epoch is no longer current.
///
/// [`handle_message`]: ListViewController::handle_message
pub struct ListViewController {
    source: Arc<dyn ItemSource>,
    query: ListQuery,
    result: ListResult,
    epoch: Epoch,
    /// Sender handed to every spawned fetch
    message_tx: MessageSender,
    /// Receiver for settled fetches; taken by the event loop when it owns the
    /// channel, kept here when the controller is driven directly
    pub message_rx: Option<MessageReceiver>,
}

impl ListViewController {
    /// Controller with its own message channel.
    pub fn new(source: Arc<dyn ItemSource>, page_size: u64) -> Self {
        let (message_tx, message_rx) = message_channel();
        let mut controller = Self::with_sender(source, page_size, message_tx);
        controller.message_rx = Some(message_rx);
        controller
    }

    /// Controller that reports on a channel owned by someone else.
    pub fn with_sender(source: Arc<dyn ItemSource>, page_size: u64, message_tx: MessageSender) -> Self {
        Self {
            source,
            query: ListQuery::new(page_size),
            result: ListResult::default(),
            epoch: Epoch::default(),
            message_tx,
            message_rx: None,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn result(&self) -> &ListResult {
        &self.result
    }

    pub fn status(&self) -> FetchStatus {
        self.result.status
    }

    pub fn items(&self) -> &[Item] {
        &self.result.items
    }

    /// The epoch of the most recent trigger.
    pub fn current_epoch(&self) -> Epoch {
        self.epoch
    }

    /// Loaded in paginated mode with fewer than a full page.
    ///
    /// The remote reports no total, so this is the only end-of-data signal.
    pub fn is_short_page(&self) -> bool {
        self.result.status == FetchStatus::Loaded
            && !self.query.is_searching()
            && (self.result.items.len() as u64) < self.query.page_size
    }

    /// Jump to page `n` (clamped to ≥ 1) and fetch it.
    ///
    /// Ignored while searching; returns the started epoch otherwise.
    pub fn set_page(&mut self, n: i64) -> Option<Epoch> {
        if self.query.is_searching() {
            tracing::debug!(requested = n, "Ignoring page change while searching");
            return None;
        }

        self.query.page = u64::try_from(n.max(1)).unwrap_or(1);
        Some(self.start_fetch())
    }

    /// Advance one page. There is no upper bound.
    pub fn next_page(&mut self) -> Option<Epoch> {
        let next = self.query.page.saturating_add(1);
        self.set_page(i64::try_from(next).unwrap_or(i64::MAX))
    }

    /// Go back one page; a no-op on page 1.
    pub fn previous_page(&mut self) -> Option<Epoch> {
        if self.query.page <= 1 {
            return None;
        }
        let previous = self.query.page - 1;
        self.set_page(i64::try_from(previous).unwrap_or(i64::MAX))
    }

    /// Search the whole collection for `term`.
    ///
    /// A blank term behaves exactly like [`clear_search`](Self::clear_search).
    /// The page cursor is left untouched.
    pub fn submit_search(&mut self, term: &str) -> Epoch {
        let term = term.trim();
        if term.is_empty() {
            return self.clear_search();
        }

        self.query.mode = ListMode::Search {
            term: term.to_string(),
        };
        self.start_fetch()
    }

    /// Leave search mode and refetch the page held before the search.
    pub fn clear_search(&mut self) -> Epoch {
        self.query.mode = ListMode::Paginated;
        self.start_fetch()
    }

    /// Re-issue the active query. Used for the initial load and to recover
    /// from an error.
    pub fn refresh(&mut self) -> Epoch {
        self.start_fetch()
    }

    fn start_fetch(&mut self) -> Epoch {
        let epoch = self.epoch.advance();
        self.result.begin_loading();

        let request = self.query.request();
        tracing::debug!(epoch = %epoch, request = ?request, "Starting list fetch");

        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = match &request {
                FetchRequest::Page { page, page_size } => {
                    source.fetch_page(*page, *page_size).await
                }
                FetchRequest::Search { term } => source.search_all(term).await,
            };
            // The receiver is gone only when the screen is shutting down.
            let _ = message_tx.send(ViewMessage::ListSettled {
                epoch,
                request,
                outcome,
            });
        });

        epoch
    }

    /// Apply a settled fetch. Returns `true` if it was current and changed the
    /// result, `false` if it was stale or not a list message.
    pub fn handle_message(&mut self, msg: ViewMessage) -> bool {
        match msg {
            ViewMessage::ListSettled {
                epoch,
                request,
                outcome,
            } => self.apply_settled(epoch, &request, outcome),
            ViewMessage::DetailSettled { .. } => false,
        }
    }

    fn apply_settled(
        &mut self,
        epoch: Epoch,
        request: &FetchRequest,
        outcome: FetchResult<Vec<Item>>,
    ) -> bool {
        if epoch != self.epoch {
            tracing::debug!(
                epoch = %epoch,
                current = %self.epoch,
                ok = outcome.is_ok(),
                "Discarding stale list fetch"
            );
            return false;
        }

        match outcome {
            Ok(items) => {
                tracing::info!(epoch = %epoch, count = items.len(), "List fetch settled");
                self.result.loaded(items);
            }
            Err(e) => {
                tracing::warn!(
                    epoch = %epoch,
                    code = e.error_code(),
                    error = %e,
                    "List fetch failed"
                );
                let message = if request.is_search() {
                    SEARCH_ERROR_MESSAGE
                } else {
                    FETCH_ERROR_MESSAGE
                };
                self.result.errored(message, e);
            }
        }
        true
    }

    /// Wait for the next settled fetch on the controller's own channel and
    /// apply it.
    ///
    /// Returns `None` when the receiver has been taken or closed.
    pub async fn settle_next(&mut self) -> Option<bool> {
        let msg = self.message_rx.as_mut()?.recv().await?;
        Some(self.handle_message(msg))
    }

    /// Apply every message already waiting on the controller's own channel.
    /// Returns how many were applied as current.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(msg) = self.message_rx.as_mut().and_then(|rx| rx.try_recv().ok()) {
            if self.handle_message(msg) {
                applied += 1;
            }
        }
        applied
    }
}
