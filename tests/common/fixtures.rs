//! Test data builders.

use std::ops::RangeInclusive;

use postdeck::error::FetchError;
use postdeck::models::{Item, Owner};

pub fn item(id: u64) -> Item {
    Item {
        id,
        owner_id: (id - 1) / 10 + 1,
        title: format!("post {}", id),
        body: format!("body of post {}", id),
    }
}

pub fn items(ids: RangeInclusive<u64>) -> Vec<Item> {
    ids.map(item).collect()
}

pub fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|i| i.id).collect()
}

pub fn owner(id: u64) -> Owner {
    Owner {
        id,
        name: format!("Owner {}", id),
        username: format!("owner{}", id),
        email: format!("owner{}@example.com", id),
    }
}

pub fn server_error() -> FetchError {
    FetchError::Response {
        status: 500,
        status_text: "Internal Server Error".to_string(),
    }
}

/// The 25-item collection used by the end-to-end scenario: every fifth item
/// mentions "Lorem" in its title, the rest mention it nowhere.
pub fn scenario_json() -> serde_json::Value {
    let posts: Vec<serde_json::Value> = (1..=25)
        .map(|id| {
            let title = if id % 5 == 0 {
                format!("Lorem post {}", id)
            } else {
                format!("post {}", id)
            };
            serde_json::json!({
                "userId": (id - 1) / 10 + 1,
                "id": id,
                "title": title,
                "body": format!("body of post {}", id),
            })
        })
        .collect();
    serde_json::Value::Array(posts)
}

/// Items `[start, start + len)` of [`scenario_json`].
pub fn scenario_window(start: usize, len: usize) -> serde_json::Value {
    let all = match scenario_json() {
        serde_json::Value::Array(all) => all,
        _ => unreachable!(),
    };
    serde_json::Value::Array(all.into_iter().skip(start).take(len).collect())
}
