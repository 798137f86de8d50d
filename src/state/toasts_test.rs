use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("t", "m1", ToastSeverity::Info);
    let b = state.push_error("m2");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_error_uses_standard_title_and_severity() {
    let mut state = ToastState::default();
    state.push_error("boom");
    assert_eq!(state.items[0].title, "There was an error.");
    assert_eq!(state.items[0].severity, ToastSeverity::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push_error("m1");
    let b = state.push_error("m2");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);

    // Dismissing an unknown id is a no-op.
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
