use crate::models::Item;

/// Keep the items whose title or body contains `term`, ignoring case.
///
/// Order is preserved. An empty term matches everything; rejecting blank
/// input is the caller's job.
pub fn filter_items(items: Vec<Item>, term: &str) -> Vec<Item> {
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}
