use super::*;

#[test]
fn known_types_resolve_to_their_icon() {
    assert_eq!(resolve("account"), "standard:account");
    assert_eq!(resolve("work_order"), "standard:work_order");
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(resolve("Account"), "standard:account");
    assert_eq!(resolve("WORK_ORDER"), "standard:work_order");
}

#[test]
fn unknown_types_fall_back_to_default() {
    assert_eq!(resolve("made_up_object"), DEFAULT_ICON);
    assert_eq!(resolve(""), DEFAULT_ICON);
}
