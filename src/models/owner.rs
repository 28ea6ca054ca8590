use serde::{Deserialize, Serialize};

/// The user an [`Item`](super::Item) belongs to.
///
/// The remote user resource carries address and company blocks too; only the
/// fields the detail view shows are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}
