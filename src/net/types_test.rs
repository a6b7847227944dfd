use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_verified: true,
    }
}

// =============================================================
// Credentials serde
// =============================================================

#[test]
fn credentials_round_trip() {
    let creds = Credentials {
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let json = serde_json::to_string(&creds).unwrap();
    let back: Credentials = serde_json::from_str(&json).unwrap();
    assert_eq!(creds, back);
}

#[test]
fn credentials_serialize_to_exactly_email_and_password() {
    let creds = Credentials {
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&creds).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["email"], "alice@example.com");
    assert_eq!(object["password"], "hunter2");
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trip() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user, back);
}

#[test]
fn user_verified_flag_uses_camel_case_on_the_wire() {
    let json = serde_json::to_string(&make_user()).unwrap();
    assert!(json.contains("\"isVerified\":true"));

    let user: User = serde_json::from_str(
        r#"{"id":"u-2","name":"Bob","email":"bob@example.com","isVerified":false}"#,
    )
    .unwrap();
    assert!(!user.is_verified);
}

#[test]
fn user_defaults_to_unverified_when_flag_missing() {
    let user: User =
        serde_json::from_str(r#"{"id":"u-3","name":"Casey","email":"casey@example.com"}"#).unwrap();
    assert!(!user.is_verified);
}

// =============================================================
// ApiFailure serde
// =============================================================

#[test]
fn api_failure_parses_message_body() {
    let failure: ApiFailure = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(failure.message, "Invalid credentials");
}

#[test]
fn api_failure_requires_message() {
    assert!(serde_json::from_str::<ApiFailure>(r#"{"detail":"nope"}"#).is_err());
}
