use super::*;

#[test]
fn price_uses_two_decimals() {
    assert_eq!(price(20.0), "¥20.00");
    assert_eq!(price(12.5), "¥12.50");
    assert_eq!(price(0.0), "¥0.00");
}

#[test]
fn or_placeholder_handles_blank_values() {
    assert_eq!(or_placeholder(Some("Library"), "TBD"), "Library");
    assert_eq!(or_placeholder(Some("  "), "TBD"), "TBD");
    assert_eq!(or_placeholder(None, "TBD"), "TBD");
}

#[test]
fn condition_tones_run_from_positive_to_danger() {
    assert_eq!(condition_tone(ConditionLevel::Excellent), Tone::Positive);
    assert_eq!(condition_tone(ConditionLevel::Good), Tone::Info);
    assert_eq!(condition_tone(ConditionLevel::Fair), Tone::Warning);
    assert_eq!(condition_tone(ConditionLevel::Poor), Tone::Danger);
}

#[test]
fn book_status_tones_match_lifecycle() {
    assert_eq!(book_status_tone(BookStatus::Available), Tone::Positive);
    assert_eq!(book_status_tone(BookStatus::Reserved), Tone::Warning);
    assert_eq!(book_status_tone(BookStatus::Sold), Tone::Danger);
    assert_eq!(book_status_tone(BookStatus::Unknown), Tone::Neutral);
    assert_eq!(book_status_label(BookStatus::OffShelf), "Off shelf");
}

#[test]
fn order_status_tones_cover_terminal_states() {
    assert_eq!(order_status_tone(OrderStatus::Pending), Tone::Warning);
    assert_eq!(order_status_tone(OrderStatus::Completed), Tone::Positive);
    assert_eq!(order_status_tone(OrderStatus::Cancelled), Tone::Danger);
    assert_eq!(order_status_tone(OrderStatus::Refunded), Tone::Danger);
}

#[test]
fn task_status_pending_is_warning() {
    assert_eq!(task_status_tone(DeliveryTaskStatus::Pending), Tone::Warning);
    assert_eq!(task_status_label(DeliveryTaskStatus::PickedUp), "Picked up");
}

#[test]
fn tone_css_class_has_modifier() {
    assert_eq!(Tone::Danger.css_class(), "tag tag--danger");
    assert_eq!(Tone::Neutral.css_class(), "tag tag--neutral");
}
