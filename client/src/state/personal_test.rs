use super::*;
use crate::net::types::{BookStatus, ConditionLevel, DeliveryMethod, OrderStatus, PaymentStatus};

fn order(id: &str) -> Order {
    Order {
        id: id.to_owned(),
        order_number: format!("ORD-{id}"),
        book_id: "b-1".to_owned(),
        buyer_id: "u-1".to_owned(),
        seller_id: "u-2".to_owned(),
        book_price: 20.0,
        delivery_fee: 0.0,
        total_amount: 20.0,
        status: OrderStatus::Completed,
        delivery_method: DeliveryMethod::Meetup,
        meetup_location: None,
        meetup_time: None,
        pickup_location: None,
        delivery_location: None,
        payment_method: None,
        payment_status: PaymentStatus::Paid,
        payment_due_at: None,
        paid_at: None,
        created_at: None,
        updated_at: None,
        completed_at: None,
        cancelled_at: None,
    }
}

fn book(id: &str) -> Book {
    Book {
        id: id.to_owned(),
        isbn: "978".to_owned(),
        title: "Title".to_owned(),
        author: "Author".to_owned(),
        publisher: None,
        original_price: 40.0,
        selling_price: 15.0,
        condition_level: ConditionLevel::Fair,
        description: None,
        seller_id: "u-1".to_owned(),
        status: BookStatus::Available,
        cover_image: None,
        gallery_images: Vec::new(),
        created_at: None,
    }
}

fn state() -> PersonalState {
    PersonalState {
        orders: vec![order("o-1"), order("o-2")],
        sales: vec![order("s-1")],
        listings: vec![book("b-1"), book("b-2"), book("b-3")],
        ..PersonalState::default()
    }
}

#[test]
fn successful_delete_removes_only_that_row() {
    let mut state = state();
    assert!(state.apply_delete(Collection::Orders, "o-1", &Ok(())));
    assert_eq!(state.orders.len(), 1);
    assert_eq!(state.orders[0].id, "o-2");
    assert_eq!(state.sales.len(), 1);
    assert_eq!(state.listings.len(), 3);
}

#[test]
fn failed_delete_keeps_row() {
    let mut state = state();
    let failure = Err(ApiError::Http { status: 400, detail: Some("Order is in progress".to_owned()) });
    for (collection, id) in [(Collection::Orders, "o-1"), (Collection::Sales, "s-1"), (Collection::Listings, "b-2")] {
        let before = state.len(collection);
        assert!(!state.apply_delete(collection, id, &failure));
        assert_eq!(state.len(collection), before, "{collection:?} must be untouched");
    }
}

#[test]
fn unauthorized_delete_keeps_row() {
    let mut state = state();
    assert!(!state.apply_delete(Collection::Listings, "b-1", &Err(ApiError::Unauthorized { detail: None })));
    assert_eq!(state.listings.len(), 3);
}

#[test]
fn delete_of_sale_and_listing_targets_their_tables() {
    let mut state = state();
    assert!(state.apply_delete(Collection::Sales, "s-1", &Ok(())));
    assert!(state.sales.is_empty());
    assert!(state.apply_delete(Collection::Listings, "b-3", &Ok(())));
    assert_eq!(state.listings.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), ["b-1", "b-2"]);
    assert_eq!(state.orders.len(), 2);
}

#[test]
fn delete_of_missing_id_reports_no_change() {
    let mut state = state();
    assert!(!state.apply_delete(Collection::Orders, "nope", &Ok(())));
    assert_eq!(state.orders.len(), 2);
}

#[test]
fn loading_flags_are_per_collection() {
    let mut state = PersonalState::default();
    state.set_loading(Collection::Sales, true);
    assert!(state.is_loading(Collection::Sales));
    assert!(!state.is_loading(Collection::Orders));
    assert!(!state.is_loading(Collection::Listings));
    assert_eq!(Collection::Sales.noun(), "sale record");
}

#[test]
fn failed_profile_load_records_reason() {
    let mut state = PersonalState::default();
    state.begin_profile_load();
    assert!(state.loading.profile);

    state.finish_profile_load(Err(ApiError::Network("offline".to_owned())));
    assert!(!state.loading.profile);
    assert_eq!(state.profile, None);
    assert_eq!(state.profile_error.as_deref(), Some("Failed to load your profile"));

    state.begin_profile_load();
    assert_eq!(state.profile_error, None);
    state.finish_profile_load(Err(ApiError::Http { status: 404, detail: Some("User not found".to_owned()) }));
    assert_eq!(state.profile_error.as_deref(), Some("User not found"));
}

#[test]
fn profile_load_stores_profile() {
    let mut state = PersonalState { profile_error: Some("offline".to_owned()), ..PersonalState::default() };
    state.begin_profile_load();
    state.finish_profile_load(Ok(UserProfile {
        id: "u-1".to_owned(),
        student_id: "2021001".to_owned(),
        name: "Lin".to_owned(),
        phone: "555".to_owned(),
        credit_score: 100,
    }));
    assert_eq!(state.profile.as_ref().map(|p| p.student_id.as_str()), Some("2021001"));
    assert_eq!(state.profile_error, None);
}
