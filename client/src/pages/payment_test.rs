use super::*;

#[test]
fn delivery_request_needs_both_locations() {
    assert_eq!(validate_delivery_request("", "Dorm 5"), Err("Enter a pickup location."));
    assert_eq!(validate_delivery_request("Library", "  "), Err("Enter a delivery location."));
}

#[test]
fn delivery_request_trims_locations() {
    let request = validate_delivery_request(" Library ", " Dorm 5, room 301 ").unwrap();
    assert_eq!(request.pickup_location, "Library");
    assert_eq!(request.delivery_location, "Dorm 5, room 301");
}

#[test]
fn blank_method_choice_defers_to_backend() {
    assert_eq!(parse_method_choice(""), None);
    assert_eq!(parse_method_choice("alipay"), Some(PaymentMethod::Alipay));
}
