use super::*;
use crate::state::auth::SESSION_KEYS;
use crate::util::storage::MemoryStore;

fn signed_in_store() -> MemoryStore {
    MemoryStore::with(&[
        ("token", "tok-1"),
        ("user_id", "u-1"),
        ("student_id", "2021001"),
        ("user_name", "Lin"),
        ("unrelated", "keep"),
    ])
}

#[test]
fn handle_unauthorized_clears_session_and_redirects() {
    let store = signed_in_store();
    let target = handle_unauthorized(&store, "/personal");
    assert_eq!(target.as_deref(), Some("/login?redirect=%2Fpersonal"));
    for key in SESSION_KEYS {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    assert_eq!(store.get("unrelated").as_deref(), Some("keep"));
}

#[test]
fn handle_unauthorized_on_login_page_clears_without_redirect() {
    let store = signed_in_store();
    assert_eq!(handle_unauthorized(&store, "/login"), None);
    assert_eq!(store.get("token"), None);
}

#[test]
fn handle_unauthorized_from_every_page_targets_login() {
    for path in ["/", "/books", "/books/b-1", "/orders/o-1/pay", "/delivery", "/publish"] {
        let store = signed_in_store();
        let target = handle_unauthorized(&store, path).unwrap();
        assert!(target.starts_with("/login"), "{path} -> {target}");
        assert_eq!(store.get("token"), None);
    }
}

#[test]
fn login_redirect_target_for_root_has_no_query() {
    assert_eq!(login_redirect_target("/").as_deref(), Some("/login"));
    assert_eq!(login_redirect_target("").as_deref(), Some("/login"));
}

#[test]
fn login_redirect_target_encodes_nested_path() {
    assert_eq!(
        login_redirect_target("/orders/o 1/pay").as_deref(),
        Some("/login?redirect=%2Forders%2Fo%201%2Fpay")
    );
}

#[test]
fn encode_component_keeps_unreserved_and_escapes_utf8() {
    assert_eq!(encode_component("abc-_.~XYZ09"), "abc-_.~XYZ09");
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("书"), "%E4%B9%A6");
}

#[test]
fn sanitize_redirect_accepts_relative_paths_only() {
    assert_eq!(sanitize_redirect(Some("/personal")), "/personal");
    assert_eq!(sanitize_redirect(Some("/orders/o-1/pay")), "/orders/o-1/pay");
    assert_eq!(sanitize_redirect(Some("https://evil.example")), "/");
    assert_eq!(sanitize_redirect(Some("//evil.example")), "/");
    assert_eq!(sanitize_redirect(Some("/login")), "/");
    assert_eq!(sanitize_redirect(None), "/");
}

#[test]
fn sanitize_redirect_refuses_paths_browsers_normalize_off_origin() {
    assert_eq!(sanitize_redirect(Some("/\\evil.example")), "/");
    assert_eq!(sanitize_redirect(Some("/\\/evil.example")), "/");
    assert_eq!(sanitize_redirect(Some("/\t/evil.example")), "/");
    assert_eq!(sanitize_redirect(Some("/\n/evil.example")), "/");
    assert_eq!(sanitize_redirect(Some("/books?q=a%5Cb")), "/books?q=a%5Cb");
}
