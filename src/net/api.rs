//! REST API helpers for communicating with the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade UI behavior without crashing hydration. Invalid credentials,
//! network faults, and server errors all surface as a single error message;
//! classifying them further is the caller's concern, and none of them are
//! retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, User};

/// Bound on how long a login attempt may stay in flight.
#[cfg(feature = "hydrate")]
const LOGIN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Error message surfaced when the bounded wait elapses.
pub const LOGIN_TIMEOUT_MESSAGE: &str = "Login request timed out.";

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Authenticate via `POST /api/auth/login`.
///
/// Resolves to the authenticated user record, which may or may not be
/// verified. The request races a bounded wait so an unresponsive backend
/// cannot leave the attempt pending forever.
///
/// # Errors
///
/// Returns a display message when the HTTP request fails, the server rejects
/// the credentials, or the bounded wait elapses.
pub async fn login(credentials: &Credentials) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{self, Either};

        let request = std::pin::pin!(send_login(credentials));
        let timeout = std::pin::pin!(gloo_timers::future::sleep(LOGIN_TIMEOUT));
        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(LOGIN_TIMEOUT_MESSAGE.to_owned()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn send_login(credentials: &Credentials) -> Result<User, String> {
    let resp = gloo_net::http::Request::post("/api/auth/login")
        .json(credentials)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(rejection_message(resp).await);
    }
    resp.json::<User>().await.map_err(|e| e.to_string())
}

/// Extract the server's failure detail, falling back to a status-line
/// message when the body is not the structured `{ "message": ... }` shape.
#[cfg(feature = "hydrate")]
async fn rejection_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<super::types::ApiFailure>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => login_failed_message(status),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
