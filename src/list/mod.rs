//! List-view state machine.
//!
//! [`ListViewController`] owns the query (page cursor or search term), the
//! published [`ListResult`], and the fetch epoch. Every trigger starts a new
//! epoch and spawns the fetch; the spawned task reports back with a
//! [`ViewMessage`] and only a message carrying the current epoch may change
//! the result.
//!
//! [`DetailController`] applies the same epoch rule to the single-item
//! detail screen.
//!
//! All triggering operations spawn onto the ambient tokio runtime and must be
//! called from inside it.

mod controller;
mod detail;
mod epoch;
mod messages;
mod query;
mod result;

pub use controller::{ListViewController, FETCH_ERROR_MESSAGE, SEARCH_ERROR_MESSAGE};
pub use detail::{DetailController, DetailState, ItemDetail, DETAIL_ERROR_MESSAGE};
pub use epoch::Epoch;
pub use messages::{message_channel, MessageReceiver, MessageSender, ViewMessage};
pub use query::{FetchRequest, ListMode, ListQuery};
pub use result::{FetchStatus, ListResult};
