use super::*;

#[test]
fn push_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.push(NoticeKind::Info, "first");
    state.push(NoticeKind::Error, "second");
    let current = state.current.clone().unwrap();
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.text, "second");
}

#[test]
fn dismiss_clears_matching_notice() {
    let mut state = NoticeState::default();
    let seq = state.push(NoticeKind::Success, "Paid");
    state.dismiss(seq);
    assert!(state.current.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "Paid");
    state.push(NoticeKind::Error, "Cancel failed");
    state.dismiss(first);
    assert_eq!(state.current.as_ref().map(|n| n.text.as_str()), Some("Cancel failed"));
}

#[test]
fn css_class_has_kind_modifier() {
    assert_eq!(NoticeKind::Error.css_class(), "notice notice--error");
}
