//! Application state for the TUI.
//!
//! [`App`] wires the list controller, the detail controller and the
//! preference store to one message channel. The event loop in `main` takes
//! [`App::message_rx`] and feeds every settled fetch back through
//! [`App::handle_message`].

mod handlers;
mod input;

pub use input::InputMode;

use std::sync::Arc;

use tokio::sync::watch;

use crate::list::{
    message_channel, DetailController, Epoch, ListViewController, MessageReceiver, ViewMessage,
};
use crate::models::Item;
use crate::preference::{PreferenceStore, Theme};
use crate::traits::ItemSource;

/// Main application state
pub struct App {
    pub list: ListViewController,
    pub detail: DetailController,
    pub preferences: PreferenceStore,
    /// Theme as last published by the preference store
    pub theme_rx: watch::Receiver<Theme>,
    pub input_mode: InputMode,
    /// Index of the highlighted row in the current items
    pub selected: usize,
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Receiver for settled fetches (taken by the event loop for select!)
    pub message_rx: Option<MessageReceiver>,
}

impl App {
    pub fn new(source: Arc<dyn ItemSource>, page_size: u64, preferences: PreferenceStore) -> Self {
        let (message_tx, message_rx) = message_channel();
        let theme_rx = preferences.subscribe();

        Self {
            list: ListViewController::with_sender(Arc::clone(&source), page_size, message_tx.clone()),
            detail: DetailController::new(source, message_tx),
            preferences,
            theme_rx,
            input_mode: InputMode::Normal,
            selected: 0,
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
        }
    }

    /// Issue the initial page fetch.
    pub fn start(&mut self) -> Epoch {
        tracing::info!(page_size = self.list.query().page_size, "Starting initial load");
        self.list.refresh()
    }

    /// Route a settled fetch to the controller that started it.
    pub fn handle_message(&mut self, msg: ViewMessage) {
        let applied = match msg {
            msg @ ViewMessage::ListSettled { .. } => {
                let applied = self.list.handle_message(msg);
                if applied {
                    self.clamp_selection();
                }
                applied
            }
            msg @ ViewMessage::DetailSettled { .. } => self.detail.handle_message(msg),
        };

        if applied {
            self.mark_dirty();
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme_rx.borrow()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.list.items().get(self.selected)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.list.items().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
