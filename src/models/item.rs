use serde::{Deserialize, Serialize};

/// A single entry of the remote collection.
///
/// Items are immutable once fetched. The list controller replaces its whole
/// result set on every successful fetch rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier, unique within the collection
    pub id: u64,
    /// Identifier of the owning user (JSONPlaceholder sends this as "userId")
    #[serde(alias = "userId")]
    pub owner_id: u64,
    pub title: String,
    pub body: String,
}

impl Item {
    /// Case-insensitive substring match against title or body.
    ///
    /// `needle` must already be lowercased; callers filtering a whole
    /// collection lowercase the term once instead of per item.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}
