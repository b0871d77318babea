//! Login page with an email/password form.
//!
//! On success the verified result lands in the session store as three
//! writes (token, user, flag) inside one synchronous continuation, so
//! the gate never observes a torn session on the follow-up navigation.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[cfg(feature = "hydrate")]
use crate::app::AppSession;

/// Login page — posts credentials to the auth service and records the
/// result in the session store.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<AppSession>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let (email_value, password_value) = (email.get(), password.get());
        if email_value.trim().is_empty() || password_value.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(email_value.trim(), &password_value).await {
                    Ok(success) => {
                        session.update(|store| {
                            store.set_token(success.token);
                            store.set_user(success.user);
                            store.set_logged_in(true);
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Nice Lab"</h1>
            <form class="login-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || pending.get()
                >
                    "Sign in"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
