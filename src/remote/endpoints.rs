//! URL layout of the remote collection.

/// JSONPlaceholder, the public demo API the layout defaults target.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Where the collection lives and how windows are requested.
///
/// Defaults produce `GET {base}/posts?_start=20&_limit=10`. Pointing
/// `collection_path` at `/items` and the parameters at `offset`/`limit` gives
/// the generic `GET /items?offset=&limit=` layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub collection_path: String,
    pub owners_path: String,
    pub offset_param: String,
    pub limit_param: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection_path: "/posts".to_string(),
            owners_path: "/users".to_string(),
            offset_param: "_start".to_string(),
            limit_param: "_limit".to_string(),
        }
    }
}

impl Endpoints {
    /// Default layout against another host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the window parameter names.
    pub fn with_window_params(mut self, offset: &str, limit: &str) -> Self {
        self.offset_param = offset.to_string();
        self.limit_param = limit.to_string();
        self
    }

    /// Override the collection path.
    pub fn with_collection_path(mut self, path: &str) -> Self {
        self.collection_path = path.to_string();
        self
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The whole collection.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base(), self.collection_path)
    }

    /// One window of `limit` items starting at `offset`.
    pub fn window_url(&self, offset: u64, limit: u64) -> String {
        format!(
            "{}?{}={}&{}={}",
            self.collection_url(),
            self.offset_param,
            offset,
            self.limit_param,
            limit
        )
    }

    pub fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    pub fn comments_url(&self, item_id: u64) -> String {
        format!("{}/{}/comments", self.collection_url(), item_id)
    }

    pub fn owner_url(&self, owner_id: u64) -> String {
        format!("{}{}/{}", self.base(), self.owners_path, owner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_url() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.window_url(20, 10),
            "https://jsonplaceholder.typicode.com/posts?_start=20&_limit=10"
        );
    }

    #[test]
    fn test_generic_layout() {
        let endpoints = Endpoints::with_base_url("http://localhost:8080/")
            .with_collection_path("/items")
            .with_window_params("offset", "limit");
        assert_eq!(endpoints.collection_url(), "http://localhost:8080/items");
        assert_eq!(
            endpoints.window_url(0, 5),
            "http://localhost:8080/items?offset=0&limit=5"
        );
    }

    #[test]
    fn test_detail_urls() {
        let endpoints = Endpoints::with_base_url("http://h");
        assert_eq!(endpoints.item_url(7), "http://h/posts/7");
        assert_eq!(endpoints.comments_url(7), "http://h/posts/7/comments");
        assert_eq!(endpoints.owner_url(3), "http://h/users/3");
    }
}
