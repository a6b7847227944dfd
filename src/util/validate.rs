//! Login form field validation.
//!
//! DESIGN
//! ======
//! Pure synchronous rules: the submit handler gates dispatch on them without
//! touching the network, and the shapes are testable headlessly. Messages are
//! written for display next to the offending field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A failed field check: which rule failed and the message to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

/// The rule a field value failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field was empty.
    MissingField,
    /// The value does not match the expected shape.
    InvalidFormat,
}

/// Validates the email field: must be present and `local@domain` shaped.
///
/// Returns the trimmed value on success.
pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError {
            kind: FieldErrorKind::MissingField,
            message: "Email is required",
        });
    }
    if !is_valid_email(value) {
        return Err(FieldError {
            kind: FieldErrorKind::InvalidFormat,
            message: "Enter a valid email",
        });
    }
    Ok(value.to_owned())
}

/// Validates the password field: presence only; login imposes no shape
/// constraints on an existing password.
pub fn validate_password(raw: &str) -> Result<String, FieldError> {
    if raw.is_empty() {
        return Err(FieldError {
            kind: FieldErrorKind::MissingField,
            message: "Password is required",
        });
    }
    Ok(raw.to_owned())
}

/// `local@domain` shape: exactly one `@`, a non-empty local part, and a
/// dotted domain whose labels are alphanumeric-or-hyphen and do not start or
/// end with a hyphen.
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(is_valid_domain_label)
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
