//! Storefront landing page for authenticated shoppers.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Signed-out sessions are pushed
//! back to `/login` once the session restore has settled.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Home page — greets the signed-in shopper and offers logout.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    install_unauth_redirect(session, navigate);

    let shopper_name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "there".to_owned())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.update(|s| s.user = None);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>
                            {move || {
                                if session.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header toolbar">
                    <span class="toolbar__brand">"Shopfront"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || shopper_name()}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="home-page__content">
                    <h2>{move || format!("Welcome back, {}!", shopper_name())}</h2>
                    <p>"Browse the catalog to start shopping."</p>
                </main>
            </div>
        </Show>
    }
}
