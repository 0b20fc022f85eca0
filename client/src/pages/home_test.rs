use super::*;

#[test]
fn blank_search_sends_no_query() {
    assert_eq!(search_query(""), None);
    assert_eq!(search_query("   "), None);
}

#[test]
fn search_text_is_trimmed() {
    assert_eq!(search_query("  rust book "), Some("rust book".to_owned()));
}
