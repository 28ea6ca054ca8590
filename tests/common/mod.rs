//! Common test utilities for integration tests.
//!
//! [`GatedSource`] is an `ItemSource` whose list calls do not answer until the
//! test releases them, so tests decide the order in which fetches settle.
//!
//! ```ignore
//! let source = GatedSource::new();
//! let mut controller = ListViewController::new(Arc::new(source.clone()), 10);
//! controller.set_page(2);
//! source.wait_for_pending(1).await;
//! source.release(&Call::Page { page: 2, page_size: 10 }, Ok(items(11..=20)));
//! controller.settle_next().await;
//! ```

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use postdeck::error::{FetchError, FetchResult};
use postdeck::models::{Comment, Item, Owner};
use postdeck::traits::ItemSource;

/// A list call made against a [`GatedSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Page { page: u64, page_size: u64 },
    Search { term: String },
}

struct Pending {
    call: Call,
    reply: oneshot::Sender<FetchResult<Vec<Item>>>,
}

/// List calls block until released; detail calls answer from fixtures.
#[derive(Clone, Default)]
pub struct GatedSource {
    pending: Arc<Mutex<Vec<Pending>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every list call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Yield to spawned fetches until at least `n` calls are waiting.
    pub async fn wait_for_pending(&self, n: usize) {
        for _ in 0..10_000 {
            if self.pending_count() >= n {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!(
            "expected {} pending calls, found {}",
            n,
            self.pending_count()
        );
    }

    /// Answer the oldest pending call equal to `call`.
    pub fn release(&self, call: &Call, outcome: FetchResult<Vec<Item>>) {
        let mut pending = self.pending.lock().unwrap();
        let index = pending
            .iter()
            .position(|p| &p.call == call)
            .unwrap_or_else(|| panic!("no pending call {:?}", call));
        let entry = pending.remove(index);
        let _ = entry.reply.send(outcome);
    }

    async fn gate(&self, call: Call) -> FetchResult<Vec<Item>> {
        let (reply, rx) = oneshot::channel();
        self.calls.lock().unwrap().push(call.clone());
        self.pending.lock().unwrap().push(Pending { call, reply });
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Transport("gate dropped".to_string())))
    }
}

#[async_trait]
impl ItemSource for GatedSource {
    async fn fetch_page(&self, page: u64, page_size: u64) -> FetchResult<Vec<Item>> {
        self.gate(Call::Page { page, page_size }).await
    }

    async fn search_all(&self, term: &str) -> FetchResult<Vec<Item>> {
        self.gate(Call::Search {
            term: term.to_string(),
        })
        .await
    }

    async fn fetch_item(&self, id: u64) -> FetchResult<Item> {
        Ok(item(id))
    }

    async fn fetch_comments(&self, _item_id: u64) -> FetchResult<Vec<Comment>> {
        Ok(Vec::new())
    }

    async fn fetch_owner(&self, owner_id: u64) -> FetchResult<Owner> {
        Ok(owner(owner_id))
    }
}
