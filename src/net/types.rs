//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the storefront API payloads (camelCase on the wire) so
//! serde round-trips stay lossless and handler code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sanitized credential pair submitted to the login endpoint.
///
/// Built from the raw login form; transient form-schema fields such as the
/// password confirmation are dropped before this struct exists, so the
/// serialized request body carries exactly these two keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email address, trimmed.
    pub email: String,
    /// Account password, submitted verbatim.
    pub password: String,
}

/// An authenticated shopper as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Whether the account's email address has been verified. Records that
    /// omit the flag are treated as unverified.
    #[serde(default)]
    pub is_verified: bool,
}

/// Structured failure body returned by the API on error statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Human-readable failure detail, surfaced to the shopper as-is.
    pub message: String,
}
