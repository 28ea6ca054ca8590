//! Messages sent from spawned fetch tasks back to the controllers.

use tokio::sync::mpsc;

use super::detail::ItemDetail;
use super::epoch::Epoch;
use super::query::FetchRequest;
use crate::error::FetchResult;
use crate::models::Item;

pub type MessageSender = mpsc::UnboundedSender<ViewMessage>;
pub type MessageReceiver = mpsc::UnboundedReceiver<ViewMessage>;

/// Create the channel shared by the controllers of one screen.
pub fn message_channel() -> (MessageSender, MessageReceiver) {
    mpsc::unbounded_channel()
}

/// A fetch has settled, successfully or not.
#[derive(Debug, Clone)]
pub enum ViewMessage {
    /// A list fetch (page or search) finished
    ListSettled {
        epoch: Epoch,
        request: FetchRequest,
        outcome: FetchResult<Vec<Item>>,
    },
    /// A detail fetch finished
    DetailSettled {
        epoch: Epoch,
        item_id: u64,
        outcome: FetchResult<ItemDetail>,
    },
}

impl ViewMessage {
    pub fn epoch(&self) -> Epoch {
        match self {
            ViewMessage::ListSettled { epoch, .. } => *epoch,
            ViewMessage::DetailSettled { epoch, .. } => *epoch,
        }
    }
}
