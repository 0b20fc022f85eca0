use super::*;
use crate::net::types::{BookStatus, ConditionLevel};

fn book(id: &str) -> Book {
    Book {
        id: id.to_owned(),
        isbn: "978".to_owned(),
        title: format!("Book {id}"),
        author: "Author".to_owned(),
        publisher: None,
        original_price: 40.0,
        selling_price: 15.0,
        condition_level: ConditionLevel::Good,
        description: None,
        seller_id: "u-9".to_owned(),
        status: BookStatus::Available,
        cover_image: None,
        gallery_images: Vec::new(),
        created_at: None,
    }
}

#[test]
fn begin_load_clears_error_and_sets_loading() {
    let mut state = BooksState { error: Some("old".to_owned()), ..BooksState::default() };
    state.begin_load();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert!(state.show_skeleton());
}

#[test]
fn finish_load_replaces_items() {
    let mut state = BooksState { items: vec![book("old")], ..BooksState::default() };
    state.begin_load();
    assert!(state.show_refreshing());
    state.finish_load(Ok(vec![book("a"), book("b")]), None);
    assert!(!state.loading);
    assert_eq!(state.items.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn finish_load_truncates_to_limit() {
    let mut state = BooksState::default();
    let books = (0..12).map(|i| book(&i.to_string())).collect();
    state.finish_load(Ok(books), Some(HOME_FEATURED_LIMIT));
    assert_eq!(state.items.len(), HOME_FEATURED_LIMIT);
    assert_eq!(state.items[0].id, "0");
}

#[test]
fn failed_refresh_keeps_previous_items() {
    let mut state = BooksState { items: vec![book("a")], ..BooksState::default() };
    state.begin_load();
    state.finish_load(Err(ApiError::Network("offline".to_owned())), None);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Load failed"));
    assert!(!state.show_empty());
}

#[test]
fn failed_load_surfaces_backend_detail() {
    let mut state = BooksState::default();
    state.finish_load(Err(ApiError::Http { status: 500, detail: Some("database down".to_owned()) }), None);
    assert_eq!(state.error.as_deref(), Some("database down"));
}

#[test]
fn empty_success_shows_empty_state() {
    let mut state = BooksState::default();
    state.begin_load();
    state.finish_load(Ok(Vec::new()), None);
    assert!(state.show_empty());
    assert!(!state.show_skeleton());
}
