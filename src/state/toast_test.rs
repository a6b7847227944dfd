use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.error("first");
    let second = state.success("second");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_keeps_severity_and_message() {
    let mut state = ToastState::default();
    let id = state.error("Invalid credentials");
    let toast = state.toasts.iter().find(|t| t.id == id).unwrap();
    assert_eq!(toast.severity, ToastSeverity::Error);
    assert_eq!(toast.message, "Invalid credentials");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.error("first");
    let second = state.success("second");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("kept");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.error("first");
    state.dismiss(first);
    let second = state.error("second");
    assert!(second > first);
}
