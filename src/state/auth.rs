//! Auth-session and login-attempt state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the process-wide identity store: written by the startup
//! session restore and by a successful login resolution, read by route guards
//! and user-aware components. `LoginState` tracks a single submission attempt
//! and is reset whenever the login page is torn down, so a stale status or
//! error from a prior visit cannot leak into a new one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Credentials, User};

/// Authentication session tracking the current shopper and restore status.
///
/// `loading` is true while the startup session restore is in flight; route
/// guards wait for it before deciding anything from an absent user.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Status of the current login submission attempt.
///
/// Monotonic per attempt: `Idle → Pending → {Fulfilled | Rejected}`. A later
/// attempt re-enters `Pending`; teardown forces `Idle` from any state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// State of the current login attempt: status plus the most recent failure.
///
/// `error` is present only after a rejected resolution and cleared by the
/// next attempt or by [`LoginState::reset`].
#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub status: LoginStatus,
    pub error: Option<String>,
}

impl LoginState {
    /// Marks a new attempt in flight, clearing any prior failure.
    pub fn begin_attempt(&mut self) {
        self.status = LoginStatus::Pending;
        self.error = None;
    }

    /// Applies a successful backend resolution.
    pub fn resolve_success(&mut self) {
        self.status = LoginStatus::Fulfilled;
        self.error = None;
    }

    /// Applies a failed backend resolution with its display message.
    pub fn resolve_failure(&mut self, message: String) {
        self.status = LoginStatus::Rejected;
        self.error = Some(message);
    }

    /// Returns the attempt to its initial state. Idempotent; called on
    /// login-page teardown regardless of where the attempt stopped.
    pub fn reset(&mut self) {
        self.status = LoginStatus::Idle;
        self.error = None;
    }

    /// Whether a request is currently outstanding.
    pub fn is_pending(&self) -> bool {
        self.status == LoginStatus::Pending
    }
}

/// Raw login form record.
///
/// `confirm_password` exists because the form schema is shared with account
/// creation; it is transient baggage and never reaches the wire.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

impl LoginForm {
    /// Strips transient fields down to the submittable credential pair.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}
