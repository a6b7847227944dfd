//! Verification hand-off page for authenticated but unverified accounts.

use leptos::prelude::*;

use crate::state::auth::SessionState;

/// Static hand-off card. The OTP entry flow itself lives elsewhere; the
/// login flow only routes unverified identities here.
#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="verify-page">
            <div class="verify-card">
                <h1>"Verify your email"</h1>
                <p>
                    {move || match session.get().user {
                        Some(user) => format!("We sent a one-time code to {}.", user.email),
                        None => "We sent a one-time code to your email address.".to_owned(),
                    }}
                </p>
                <p class="verify-card__hint">
                    "Enter it on this device to finish signing in."
                </p>
            </div>
        </div>
    }
}
