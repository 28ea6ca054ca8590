//! Remote list client over an [`HttpClient`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::endpoints::Endpoints;
use super::search::filter_items;
use crate::error::{FetchError, FetchResult};
use crate::models::{Comment, Item, Owner};
use crate::traits::{Headers, HttpClient, ItemSource};

/// Typed accessor over the remote collection.
///
/// Stateless apart from its configuration: no caching, no retries. Every call
/// is exactly one GET.
#[derive(Debug, Clone)]
pub struct RemoteListClient<H> {
    http: H,
    endpoints: Endpoints,
    headers: Headers,
}

impl<H: HttpClient> RemoteListClient<H> {
    pub fn new(http: H, endpoints: Endpoints) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            http,
            endpoints,
            headers,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Get a reference to the underlying HTTP client.
    pub fn http(&self) -> &H {
        &self.http
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let response = self.http.get(url, &self.headers).await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Remote request failed");
            FetchError::from(e)
        })?;

        if !response.is_success() {
            tracing::warn!(
                url = %url,
                status = response.status,
                status_text = %response.status_text,
                "Remote returned error status"
            );
            return Err(FetchError::Response {
                status: response.status,
                status_text: response.status_text,
            });
        }

        response.json().map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Failed to decode response body");
            FetchError::from(e)
        })
    }
}

#[async_trait]
impl<H: HttpClient> ItemSource for RemoteListClient<H> {
    async fn fetch_page(&self, page: u64, page_size: u64) -> FetchResult<Vec<Item>> {
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let url = self.endpoints.window_url(offset, page_size);
        tracing::debug!(page, page_size, offset, "Fetching page");
        self.get_json(&url).await
    }

    async fn search_all(&self, term: &str) -> FetchResult<Vec<Item>> {
        let url = self.endpoints.collection_url();
        let all: Vec<Item> = self.get_json(&url).await?;
        let total = all.len();
        let found = filter_items(all, term);
        tracing::debug!(term = %term, total, matched = found.len(), "Filtered collection");
        Ok(found)
    }

    async fn fetch_item(&self, id: u64) -> FetchResult<Item> {
        self.get_json(&self.endpoints.item_url(id)).await
    }

    async fn fetch_comments(&self, item_id: u64) -> FetchResult<Vec<Comment>> {
        self.get_json(&self.endpoints.comments_url(item_id)).await
    }

    async fn fetch_owner(&self, owner_id: u64) -> FetchResult<Owner> {
        self.get_json(&self.endpoints.owner_url(owner_id)).await
    }
}
