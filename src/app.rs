//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{home::HomePage, login::LoginPage, verify_otp::VerifyOtpPage};
use crate::state::auth::{LoginState, SessionState};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Process-wide stores: session identity, current login attempt, toasts.
    // The session starts in `loading` until the restore below settles.
    let session = RwSignal::new(SessionState {
        user: None,
        loading: true,
    });
    let login = RwSignal::new(LoginState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(login);
    provide_context(toasts);

    // Restore any existing session before route guards decide anything from
    // an absent user. An identity restored here drives the same redirect
    // rules as a fresh login.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        session.update(|s| {
            s.user = user;
            s.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shopfront.css"/>
        <Title text="Shopfront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("verify-otp") view=VerifyOtpPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
