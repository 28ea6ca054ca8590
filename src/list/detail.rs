//! Single-item detail screen.

use std::sync::Arc;

use super::epoch::Epoch;
use super::messages::{MessageSender, ViewMessage};
use crate::error::FetchResult;
use crate::models::{Comment, Item, Owner};
use crate::traits::ItemSource;

/// Shown when the item or its comments cannot be loaded.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load post details. Please try again later.";

/// An item with everything the detail screen shows alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub item: Item,
    /// `None` when the owner lookup failed; the item is still shown
    pub owner: Option<Owner>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading { item_id: u64 },
    Loaded(ItemDetail),
    Errored { item_id: u64, message: String },
}

/// Opens item details with the same stale-response rule as the list.
pub struct DetailController {
    source: Arc<dyn ItemSource>,
    state: DetailState,
    epoch: Epoch,
    message_tx: MessageSender,
}

impl DetailController {
    pub fn new(source: Arc<dyn ItemSource>, message_tx: MessageSender) -> Self {
        Self {
            source,
            state: DetailState::Closed,
            epoch: Epoch::default(),
            message_tx,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn current_epoch(&self) -> Epoch {
        self.epoch
    }

    /// Load item `item_id`, its comments and its owner.
    pub fn open(&mut self, item_id: u64) -> Epoch {
        let epoch = self.epoch.advance();
        self.state = DetailState::Loading { item_id };
        tracing::debug!(epoch = %epoch, item_id, "Opening item detail");

        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = load_detail(source.as_ref(), item_id).await;
            let _ = message_tx.send(ViewMessage::DetailSettled {
                epoch,
                item_id,
                outcome,
            });
        });

        epoch
    }

    /// Close the screen. Fetches still in flight become stale.
    pub fn close(&mut self) {
        self.epoch.advance();
        self.state = DetailState::Closed;
    }

    /// Apply a settled detail fetch. Returns `true` if it was current.
    pub fn handle_message(&mut self, msg: ViewMessage) -> bool {
        let ViewMessage::DetailSettled {
            epoch,
            item_id,
            outcome,
        } = msg
        else {
            return false;
        };

        if epoch != self.epoch {
            tracing::debug!(epoch = %epoch, current = %self.epoch, "Discarding stale detail fetch");
            return false;
        }

        self.state = match outcome {
            Ok(detail) => DetailState::Loaded(detail),
            Err(e) => {
                tracing::warn!(epoch = %epoch, item_id, error = %e, "Detail fetch failed");
                DetailState::Errored {
                    item_id,
                    message: DETAIL_ERROR_MESSAGE.to_string(),
                }
            }
        };
        true
    }
}

async fn load_detail(source: &dyn ItemSource, item_id: u64) -> FetchResult<ItemDetail> {
    let (item, comments) = tokio::join!(source.fetch_item(item_id), source.fetch_comments(item_id));
    let item = item?;
    let comments = comments?;

    let owner = match source.fetch_owner(item.owner_id).await {
        Ok(owner) => Some(owner),
        Err(e) => {
            tracing::warn!(owner_id = item.owner_id, error = %e, "Owner lookup failed");
            None
        }
    };

    Ok(ItemDetail {
        item,
        owner,
        comments,
    })
}
