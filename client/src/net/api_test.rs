use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn books_endpoint_without_query_is_bare_list() {
    assert_eq!(books_endpoint(None), "/api/books");
}

#[test]
fn books_endpoint_blank_query_matches_initial_load() {
    // Focus refresh and the 15 s poll pass no query; a cleared search box
    // must produce the very same request.
    let initial = books_endpoint(None);
    assert_eq!(books_endpoint(Some("")), initial);
    assert_eq!(books_endpoint(Some("   ")), initial);
}

#[test]
fn books_endpoint_encodes_query() {
    assert_eq!(books_endpoint(Some(" linear algebra ")), "/api/books?q=linear%20algebra");
    assert_eq!(books_endpoint(Some("978-7-04")), "/api/books?q=978-7-04");
}

#[test]
fn resource_endpoints_format_expected_paths() {
    assert_eq!(book_endpoint("b-1"), "/api/books/b-1");
    assert_eq!(order_endpoint("o-1"), "/api/orders/o-1");
    assert_eq!(order_action_endpoint("o-1", "pay"), "/api/orders/o-1/pay");
    assert_eq!(order_action_endpoint("o-1", "cancel"), "/api/orders/o-1/cancel");
    assert_eq!(order_action_endpoint("o-1", "delivery"), "/api/orders/o-1/delivery");
    assert_eq!(delivery_task_accept_endpoint("t-7"), "/api/delivery_tasks/t-7/accept");
    assert_eq!(my_book_endpoint("b-2"), "/api/me/books/b-2");
}

#[test]
fn resource_endpoints_escape_path_separators() {
    assert_eq!(book_endpoint("../me"), "/api/books/..%2Fme");
}

#[test]
fn create_order_request_requires_session() {
    let store = MemoryStore::default();
    assert_eq!(
        create_order_request(&store, "b-1", DeliveryMethod::Meetup),
        Err(ApiError::NotSignedIn)
    );
}

#[test]
fn create_order_request_requires_user_id() {
    let store = MemoryStore::with(&[("token", "tok")]);
    assert_eq!(
        create_order_request(&store, "b-1", DeliveryMethod::Meetup),
        Err(ApiError::NotSignedIn)
    );
}

#[test]
fn create_order_request_uses_session_buyer() {
    let store = MemoryStore::with(&[("token", "tok"), ("user_id", "u-1")]);
    let req = create_order_request(&store, "b-1", DeliveryMethod::Meetup).unwrap();
    assert_eq!(req.buyer_id, "u-1");
    assert_eq!(req.book_id, "b-1");
    assert_eq!(req.delivery_method, DeliveryMethod::Meetup);
}

#[test]
fn unreadable_success_body_is_a_network_error() {
    assert_eq!(
        read_outcome(200, Err("body stream aborted".to_owned())),
        Err(ApiError::Network("body stream aborted".to_owned()))
    );
    assert_eq!(read_outcome(204, Ok(String::new())), Ok(String::new()));
}

#[test]
fn unreadable_error_body_keeps_status_classification() {
    assert_eq!(read_outcome(401, Err("reset".to_owned())), Err(ApiError::Unauthorized { detail: None }));
    assert_eq!(read_outcome(500, Err("reset".to_owned())), Err(ApiError::Http { status: 500, detail: None }));
    assert_eq!(
        read_outcome(409, Ok(r#"{"detail":"Book already reserved"}"#.to_owned())),
        Err(ApiError::Http { status: 409, detail: Some("Book already reserved".to_owned()) })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let result = futures::executor::block_on(fetch_books(None));
    assert_eq!(result, Err(ApiError::Unavailable));
}
