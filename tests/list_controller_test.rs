//! List controller behaviour with fetches that settle in a test-chosen order.

mod common;

use std::sync::Arc;

use common::*;
use postdeck::list::{
    FetchStatus, ListMode, ListViewController, FETCH_ERROR_MESSAGE, SEARCH_ERROR_MESSAGE,
};

fn controller(source: &GatedSource) -> ListViewController {
    ListViewController::new(Arc::new(source.clone()), 10)
}

fn page(page: u64) -> Call {
    Call::Page {
        page,
        page_size: 10,
    }
}

fn search(term: &str) -> Call {
    Call::Search {
        term: term.to_string(),
    }
}

#[tokio::test]
async fn test_page_window_is_published() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(2);
    source.wait_for_pending(1).await;
    source.release(&page(2), Ok(items(11..=20)));

    assert_eq!(list.settle_next().await, Some(true));
    assert_eq!(list.status(), FetchStatus::Loaded);
    assert_eq!(ids(list.items()), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_later_epoch_wins_when_it_settles_first() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    let e1 = list.set_page(1).unwrap();
    let e2 = list.set_page(2).unwrap();
    assert!(e2 > e1);
    source.wait_for_pending(2).await;

    source.release(&page(2), Ok(items(11..=20)));
    assert_eq!(list.settle_next().await, Some(true));
    source.release(&page(1), Ok(items(1..=10)));
    assert_eq!(list.settle_next().await, Some(false));

    assert_eq!(list.status(), FetchStatus::Loaded);
    assert_eq!(ids(list.items()), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_later_epoch_wins_when_it_settles_last() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(1);
    list.submit_search("post 1");
    source.wait_for_pending(2).await;

    source.release(&page(1), Ok(items(1..=10)));
    assert_eq!(list.settle_next().await, Some(false));
    // The stale page must not end the search's Loading state
    assert_eq!(list.status(), FetchStatus::Loading);

    source.release(&search("post 1"), Ok(vec![item(1), item(10)]));
    assert_eq!(list.settle_next().await, Some(true));
    assert_eq!(ids(list.items()), vec![1, 10]);
}

#[tokio::test]
async fn test_later_search_wins_over_earlier_search() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.submit_search("a");
    list.submit_search("b");
    source.wait_for_pending(2).await;

    source.release(&search("b"), Ok(vec![item(2)]));
    assert_eq!(list.settle_next().await, Some(true));
    source.release(&search("a"), Ok(vec![item(1)]));
    assert_eq!(list.settle_next().await, Some(false));

    assert_eq!(list.status(), FetchStatus::Loaded);
    assert_eq!(ids(list.items()), vec![2]);
    assert_eq!(list.query().search_term(), Some("b"));
}

#[tokio::test]
async fn test_stale_error_is_swallowed() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(1);
    list.set_page(2);
    source.wait_for_pending(2).await;

    source.release(&page(2), Ok(items(11..=20)));
    source.release(&page(1), Err(server_error()));
    let applied = list.settle_next().await.unwrap() as usize + list.settle_next().await.unwrap() as usize;

    assert_eq!(applied, 1);
    assert_eq!(list.status(), FetchStatus::Loaded);
    assert!(list.result().error_message.is_none());
}

#[tokio::test]
async fn test_non_positive_pages_clamp_to_one() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(0);
    list.set_page(-7);
    source.wait_for_pending(2).await;

    assert_eq!(source.calls(), vec![page(1), page(1)]);
    assert_eq!(list.query().page, 1);
}

#[tokio::test]
async fn test_blank_search_clears_without_searching() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(4);
    list.submit_search("");
    list.submit_search("   ");
    source.wait_for_pending(3).await;

    assert_eq!(source.calls(), vec![page(4), page(4), page(4)]);
    assert_eq!(list.query().mode, ListMode::Paginated);
}

#[tokio::test]
async fn test_clear_search_restores_prior_page() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(3);
    source.wait_for_pending(1).await;
    source.release(&page(3), Ok(items(21..=25)));
    list.settle_next().await;

    list.submit_search("post");
    source.wait_for_pending(1).await;
    source.release(&search("post"), Ok(items(1..=25)));
    list.settle_next().await;
    assert_eq!(list.query().search_term(), Some("post"));

    list.clear_search();
    source.wait_for_pending(1).await;
    assert_eq!(list.query().mode, ListMode::Paginated);
    assert_eq!(list.query().page, 3);
    assert_eq!(source.calls().last(), Some(&page(3)));
}

#[tokio::test]
async fn test_errors_are_recoverable() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(1);
    source.wait_for_pending(1).await;
    source.release(&page(1), Err(server_error()));
    list.settle_next().await;
    assert_eq!(list.status(), FetchStatus::Errored);
    assert_eq!(list.result().error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));

    list.submit_search("post");
    source.wait_for_pending(1).await;
    source.release(&search("post"), Err(server_error()));
    list.settle_next().await;
    assert_eq!(list.result().error_message.as_deref(), Some(SEARCH_ERROR_MESSAGE));

    list.clear_search();
    source.wait_for_pending(1).await;
    source.release(&page(1), Ok(items(1..=10)));
    list.settle_next().await;
    assert_eq!(list.status(), FetchStatus::Loaded);
    assert!(list.result().error.is_none());
}

#[tokio::test]
async fn test_hung_fetch_stays_loading() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(1);
    source.wait_for_pending(1).await;
    for _ in 0..100 {
        tokio::task::yield_now().await;
    }

    assert_eq!(list.drain_pending(), 0);
    assert_eq!(list.status(), FetchStatus::Loading);
    assert!(list.result().is_loading());
}

#[tokio::test]
async fn test_next_page_has_no_upper_bound() {
    let source = GatedSource::new();
    let mut list = controller(&source);

    list.set_page(3);
    source.wait_for_pending(1).await;
    source.release(&page(3), Ok(Vec::new()));
    list.settle_next().await;
    assert!(list.is_short_page());

    list.next_page();
    source.wait_for_pending(1).await;
    assert_eq!(list.query().page, 4);
}
