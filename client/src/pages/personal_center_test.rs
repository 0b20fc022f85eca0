use super::*;

#[test]
fn profile_needs_name_and_phone() {
    assert!(validate_profile_form("", "13800000000").is_err());
    assert!(validate_profile_form("Han Meimei", "  ").is_err());
    let update = validate_profile_form(" Han Meimei ", "13800000000").unwrap();
    assert_eq!(update, ProfileUpdate { name: "Han Meimei".to_owned(), phone: "13800000000".to_owned() });
}

#[test]
fn password_change_requires_current_password() {
    assert_eq!(validate_password_form("", "secret1", "secret1"), Err("Enter your current password."));
}

#[test]
fn new_password_has_minimum_length() {
    assert_eq!(
        validate_password_form("old", "12345", "12345"),
        Err("The new password needs at least 6 characters.")
    );
    assert!(validate_password_form("old", "123456", "123456").is_ok());
}

#[test]
fn confirmation_must_match() {
    assert_eq!(
        validate_password_form("old", "secret1", "secret2"),
        Err("The two new passwords do not match.")
    );
}

#[test]
fn password_change_carries_both_passwords() {
    let change = validate_password_form("old-pass", "new-pass", "new-pass").unwrap();
    assert_eq!(change.old_password, "old-pass");
    assert_eq!(change.new_password, "new-pass");
}

#[test]
fn only_table_tabs_map_to_collections() {
    assert_eq!(Tab::Profile.collection(), None);
    assert_eq!(Tab::Orders.collection(), Some(Collection::Orders));
    assert_eq!(Tab::Sales.collection(), Some(Collection::Sales));
    assert_eq!(Tab::Listings.collection(), Some(Collection::Listings));
}

#[test]
fn delete_prompt_names_the_row_kind() {
    assert_eq!(delete_prompt(Collection::Listings), "Delete this listing? This cannot be undone.");
    assert_eq!(delete_prompt(Collection::Sales), "Delete this sale record? This cannot be undone.");
}
