//! Toast host rendering the shared notification queue.
//!
//! Success and error notifications from the auth flow land in `ToastState`;
//! this host renders the queue and retires each toast after a short delay or
//! on click.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastSeverity, ToastState};

/// How long a toast stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Fixed overlay listing the queued toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| view! { <ToastCard toast=toast/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let Toast {
        id,
        severity,
        message,
    } = toast;

    // Dismissal is idempotent, so the timer racing a click is harmless.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        toasts.update(|t| t.dismiss(id));
    });

    let class = match severity {
        ToastSeverity::Success => "toast toast--success",
        ToastSeverity::Error => "toast toast--error",
    };

    view! {
        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {message}
        </div>
    }
}
