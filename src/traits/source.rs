//! Typed item source consumed by the list and detail controllers.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{Comment, Item, Owner};

/// Typed, read-only access to the remote collection.
///
/// [`RemoteListClient`](crate::remote::RemoteListClient) is the production
/// implementation. Controllers hold an `Arc<dyn ItemSource>` so tests can
/// control exactly when each call settles.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the window `[(page-1)*page_size, page*page_size)`.
    async fn fetch_page(&self, page: u64, page_size: u64) -> FetchResult<Vec<Item>>;

    /// Fetch the whole collection and keep items whose title or body contains
    /// `term`, ignoring case. `term` is not validated.
    async fn search_all(&self, term: &str) -> FetchResult<Vec<Item>>;

    /// Fetch a single item by id.
    async fn fetch_item(&self, id: u64) -> FetchResult<Item>;

    /// Fetch the comments attached to an item.
    async fn fetch_comments(&self, item_id: u64) -> FetchResult<Vec<Comment>>;

    /// Fetch the user owning items with `owner_id`.
    async fn fetch_owner(&self, owner_id: u64) -> FetchResult<Owner>;
}
