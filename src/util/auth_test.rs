use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(is_verified: bool) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_verified,
    }
}

// =============================================================
// Redirect rule
// =============================================================

#[test]
fn no_identity_means_no_redirect() {
    assert_eq!(redirect_destination(None), None);
}

#[test]
fn verified_identity_redirects_home() {
    let user = make_user(true);
    assert_eq!(redirect_destination(Some(&user)), Some(HOME_ROUTE));
}

#[test]
fn unverified_identity_redirects_to_verification() {
    let user = make_user(false);
    assert_eq!(redirect_destination(Some(&user)), Some(VERIFY_OTP_ROUTE));
}

// =============================================================
// Error notification rule
// =============================================================

#[test]
fn fresh_error_notifies_and_records_it() {
    let (notify, tracker) =
        error_notification_step(None, Some("Invalid credentials".to_owned()));
    assert_eq!(notify.as_deref(), Some("Invalid credentials"));
    assert_eq!(tracker.as_deref(), Some("Invalid credentials"));
}

#[test]
fn same_error_does_not_renotify() {
    let (notify, tracker) = error_notification_step(
        Some("Invalid credentials".to_owned()),
        Some("Invalid credentials".to_owned()),
    );
    assert_eq!(notify, None);
    assert_eq!(tracker.as_deref(), Some("Invalid credentials"));
}

#[test]
fn distinct_error_notifies_again() {
    let (notify, tracker) = error_notification_step(
        Some("Invalid credentials".to_owned()),
        Some("Login request timed out.".to_owned()),
    );
    assert_eq!(notify.as_deref(), Some("Login request timed out."));
    assert_eq!(tracker.as_deref(), Some("Login request timed out."));
}

#[test]
fn clearing_the_error_resets_the_tracker() {
    let (notify, tracker) =
        error_notification_step(Some("Invalid credentials".to_owned()), None);
    assert_eq!(notify, None);
    assert_eq!(tracker, None);

    // The same message notifies again after a fresh attempt fails the same way.
    let (notify, _) = error_notification_step(tracker, Some("Invalid credentials".to_owned()));
    assert_eq!(notify.as_deref(), Some("Invalid credentials"));
}

#[test]
fn absent_error_never_notifies() {
    assert_eq!(error_notification_step(None, None), (None, None));
}

// =============================================================
// Success rule
// =============================================================

#[test]
fn fulfilled_and_verified_celebrates() {
    let user = make_user(true);
    assert!(is_login_celebration(LoginStatus::Fulfilled, Some(&user)));
}

#[test]
fn fulfilled_but_unverified_does_not_celebrate() {
    let user = make_user(false);
    assert!(!is_login_celebration(LoginStatus::Fulfilled, Some(&user)));
}

#[test]
fn fulfilled_without_identity_does_not_celebrate() {
    assert!(!is_login_celebration(LoginStatus::Fulfilled, None));
}

#[test]
fn non_fulfilled_statuses_never_celebrate() {
    let user = make_user(true);
    for status in [
        LoginStatus::Idle,
        LoginStatus::Pending,
        LoginStatus::Rejected,
    ] {
        assert!(!is_login_celebration(status, Some(&user)));
    }
}
