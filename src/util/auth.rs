//! Session observers for the auth flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The decisions
//! themselves live in pure functions, with thin `Effect` installers on top,
//! so ordering and idempotence stay auditable and testable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::state::auth::{LoginStatus, SessionState};

/// Landing route for verified identities.
pub const HOME_ROUTE: &str = "/";
/// Route for authenticated but unverified identities.
pub const VERIFY_OTP_ROUTE: &str = "/verify-otp";

/// Where the current identity should route the shopper, if anywhere.
///
/// Absent identity: stay put. Present and verified: home. Present but
/// unverified: the verification-collection screen. The decision depends on
/// the identity alone, never on the login attempt's status, so it also
/// covers a session restored before the current mount.
pub fn redirect_destination(user: Option<&User>) -> Option<&'static str> {
    let user = user?;
    if user.is_verified {
        Some(HOME_ROUTE)
    } else {
        Some(VERIFY_OTP_ROUTE)
    }
}

/// One step of the error-notification rule.
///
/// Given the message last notified for and the current error, returns
/// `(message to notify now, updated tracker)`. A distinct present value
/// notifies once; re-evaluation with the same value stays silent; clearing
/// resets the tracker so the same message notifies again on a later attempt.
pub fn error_notification_step(
    last_notified: Option<String>,
    current: Option<String>,
) -> (Option<String>, Option<String>) {
    match current {
        Some(message) if last_notified.as_deref() != Some(message.as_str()) => {
            (Some(message.clone()), Some(message))
        }
        Some(message) => (None, Some(message)),
        None => (None, None),
    }
}

/// Whether a fulfilled attempt warrants the success notification and form
/// clear: the attempt resolved and the identity is strictly verified.
pub fn is_login_celebration(status: LoginStatus, user: Option<&User>) -> bool {
    status == LoginStatus::Fulfilled && user.is_some_and(|u| u.is_verified)
}

/// Navigate wherever the session identity warrants, whenever it changes.
pub fn install_session_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let Some(destination) = redirect_destination(state.user.as_ref()) {
            navigate(destination, NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever the session has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
