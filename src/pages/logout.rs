//! Logout pseudo-route.
//!
//! The session gate intercepts every navigation to `/logout`, drops the
//! session, and replaces the navigation with a redirect to `/login`, so
//! this view is never reached in practice. It still renders something
//! harmless for the one frame the router may mount it.

use leptos::prelude::*;

/// Placeholder view for the logout pseudo-route.
#[component]
pub fn LogoutPage() -> impl IntoView {
    view! {
        <div class="logout-page">
            <p>"Signing out..."</p>
        </div>
    }
}
