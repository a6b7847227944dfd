use super::*;

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[test]
fn login_timeout_message_reads_as_a_display_string() {
    assert_eq!(LOGIN_TIMEOUT_MESSAGE, "Login request timed out.");
}
