use super::*;
use crate::net::types::ConditionLevel;

fn book(status: BookStatus) -> Book {
    Book {
        id: "b1".to_owned(),
        isbn: "9787111111111".to_owned(),
        title: "Operating Systems".to_owned(),
        author: "Tanenbaum".to_owned(),
        publisher: None,
        original_price: 89.0,
        selling_price: 30.0,
        condition_level: ConditionLevel::Good,
        description: None,
        seller_id: "u2".to_owned(),
        status,
        cover_image: None,
        gallery_images: Vec::new(),
        created_at: None,
    }
}

#[test]
fn payment_path_points_at_order() {
    assert_eq!(payment_path("o-17"), "/orders/o-17/pay");
}

#[test]
fn only_available_books_can_be_bought() {
    assert!(can_buy(&book(BookStatus::Available), false));
    assert!(!can_buy(&book(BookStatus::Reserved), false));
    assert!(!can_buy(&book(BookStatus::Sold), false));
    assert!(!can_buy(&book(BookStatus::OffShelf), false));
}

#[test]
fn buy_is_blocked_while_order_in_flight() {
    assert!(!can_buy(&book(BookStatus::Available), true));
}
