//! Login page: credential form, validation gate, and submission flow.
//!
//! ARCHITECTURE
//! ============
//! The page orchestrates one attempt end to end: validate → dispatch →
//! observe. Status and error live in the process-wide `LoginState` signal,
//! and `on_cleanup` resets them regardless of where the attempt stopped, so
//! a stale outcome from this visit cannot leak into a later one. Redirect,
//! error-toast, and success-toast reactions are wired here from the pure
//! rules in `util::auth`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::{LoginForm, LoginState, SessionState};
use crate::state::toast::ToastState;
use crate::util::auth::{error_notification_step, install_session_redirect, is_login_celebration};
use crate::util::validate::{validate_email, validate_password};

/// Login page — email/password form with an email-verification gate on the
/// way out.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let login = expect_context::<RwSignal<LoginState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Form fields and per-field validation messages.
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);

    // Redirect rule: the identity alone decides the destination, including a
    // session restored before this mount.
    install_session_redirect(session, navigate);

    // Error rule: one toast per distinct failure message.
    let last_notified = RwSignal::new(None::<String>);
    Effect::new(move || {
        let current = login.get().error;
        let (notify, tracker) = error_notification_step(last_notified.get_untracked(), current);
        if let Some(message) = notify {
            toasts.update(|t| {
                t.error(message);
            });
        }
        last_notified.set(tracker);
    });

    // Success rule: fulfilled attempt + verified identity → one toast, clear
    // the submitted values. Validation messages are left alone.
    let celebrated = RwSignal::new(false);
    Effect::new(move || {
        let status = login.get().status;
        let state = session.get();
        if is_login_celebration(status, state.user.as_ref()) {
            if !celebrated.get_untracked() {
                celebrated.set(true);
                toasts.update(|t| {
                    t.success("Login successful");
                });
                email.set(String::new());
                password.set(String::new());
            }
        } else {
            celebrated.set(false);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Single-flight: ignore a submit while an attempt is outstanding.
        if login.get_untracked().is_pending() {
            return;
        }
        match validated_form(&email.get_untracked(), &password.get_untracked()) {
            Ok(form) => {
                email_error.set(None);
                password_error.set(None);
                submit_credentials(login, session, form.credentials());
            }
            Err((email_message, password_message)) => {
                email_error.set(email_message);
                password_error.set(password_message);
            }
        }
    };

    // Teardown reset: a later visit must start from a clean attempt.
    on_cleanup(move || {
        login.update(LoginState::reset);
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Shopfront"</h1>
                <p class="login-card__subtitle">"- Shop Anything"</p>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || email_error.get().is_some()>
                        <p class="login-form__field-error">
                            {move || email_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || password_error.get().is_some()>
                        <p class="login-form__field-error">
                            {move || password_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || login.get().is_pending()
                    >
                        {move || if login.get().is_pending() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="login-links">
                    <a href="/forgot-password" class="login-link">
                        "Forgot password"
                    </a>
                    <a href="/signup" class="login-link">
                        "Don't have an account? Register"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Runs both field checks, returning the sanitized form or the per-field
/// messages to display. Submission is blocked whenever this returns `Err`.
fn validated_form(
    email_raw: &str,
    password_raw: &str,
) -> Result<LoginForm, (Option<&'static str>, Option<&'static str>)> {
    match (validate_email(email_raw), validate_password(password_raw)) {
        (Ok(email), Ok(password)) => Ok(LoginForm {
            email,
            password,
            confirm_password: None,
        }),
        (email_check, password_check) => Err((
            email_check.err().map(|e| e.message),
            password_check.err().map(|e| e.message),
        )),
    }
}

/// Dispatches one authentication attempt and applies its resolution.
///
/// Status moves to `Pending` synchronously, before the request is sent. The
/// resolution writes only process-wide signals — never view-local state — so
/// it stays harmless if it arrives after this page has been torn down.
fn submit_credentials(
    login: RwSignal<LoginState>,
    session: RwSignal<SessionState>,
    credentials: Credentials,
) {
    login.update(LoginState::begin_attempt);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::login(&credentials).await {
            Ok(user) => {
                login.update(LoginState::resolve_success);
                session.update(|s| s.user = Some(user));
            }
            Err(message) => {
                log::warn!("login attempt failed: {message}");
                login.update(|l| l.resolve_failure(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, credentials);
    }
}
