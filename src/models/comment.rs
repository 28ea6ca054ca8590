use serde::{Deserialize, Serialize};

/// A comment attached to an [`Item`](super::Item).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    /// Item this comment belongs to (API sends as "postId")
    #[serde(alias = "postId")]
    pub item_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
