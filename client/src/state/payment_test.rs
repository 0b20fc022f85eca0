use super::*;
use crate::net::types::{DeliveryMethod, OrderStatus};

fn order(payment_status: PaymentStatus, due: Option<&str>) -> Order {
    Order {
        id: "o-1".to_owned(),
        order_number: "ORD-1".to_owned(),
        book_id: "b-1".to_owned(),
        buyer_id: "u-1".to_owned(),
        seller_id: "u-2".to_owned(),
        book_price: 20.0,
        delivery_fee: 0.0,
        total_amount: 20.0,
        status: OrderStatus::Pending,
        delivery_method: DeliveryMethod::Meetup,
        meetup_location: None,
        meetup_time: None,
        pickup_location: None,
        delivery_location: None,
        payment_method: None,
        payment_status,
        payment_due_at: due.map(str::to_owned),
        paid_at: None,
        created_at: None,
        updated_at: None,
        completed_at: None,
        cancelled_at: None,
    }
}

fn fixed_parser(raw: &str) -> Option<f64> {
    (raw == "due").then_some(600_000.0)
}

#[test]
fn actions_enabled_only_for_unpaid_idle_order() {
    let mut state = PaymentState { order: Some(order(PaymentStatus::Pending, None)), ..PaymentState::default() };
    assert!(state.actions_enabled());

    state.submitting = true;
    assert!(!state.actions_enabled());

    state.submitting = false;
    state.order = Some(order(PaymentStatus::Paid, None));
    assert!(!state.actions_enabled());

    state.order = None;
    assert!(!state.actions_enabled());
}

#[test]
fn countdown_uses_order_deadline_and_clock() {
    let state = PaymentState {
        order: Some(order(PaymentStatus::Pending, Some("due"))),
        now_ms: 600_000.0 - 90_000.0,
        ..PaymentState::default()
    };
    assert_eq!(state.countdown_with(fixed_parser), Countdown::Remaining { minutes: 1, seconds: 30 });
}

#[test]
fn countdown_without_deadline_is_unknown() {
    let state = PaymentState { order: Some(order(PaymentStatus::Pending, None)), ..PaymentState::default() };
    assert_eq!(state.countdown_with(fixed_parser), Countdown::Unknown);
}

#[test]
fn countdown_with_unparseable_deadline_is_unknown() {
    let state = PaymentState {
        order: Some(order(PaymentStatus::Pending, Some("garbage"))),
        ..PaymentState::default()
    };
    assert_eq!(state.countdown_with(fixed_parser), Countdown::Unknown);
}

#[test]
fn countdown_after_deadline_is_expired() {
    let state = PaymentState {
        order: Some(order(PaymentStatus::Pending, Some("due"))),
        now_ms: 700_000.0,
        ..PaymentState::default()
    };
    assert!(state.countdown_with(fixed_parser).is_expired());
}

#[test]
fn missing_book_is_explained_without_blocking_payment() {
    let mut state = PaymentState { order: Some(order(PaymentStatus::Pending, None)), ..PaymentState::default() };
    state.finish_book_load(Err(ApiError::Http { status: 404, detail: None }));
    assert_eq!(state.book, None);
    assert_eq!(state.book_error.as_deref(), Some("Could not load the book details"));
    assert!(state.actions_enabled());

    state.finish_book_load(Err(ApiError::Http { status: 404, detail: Some("Book not found".to_owned()) }));
    assert_eq!(state.book_error.as_deref(), Some("Book not found"));
}
