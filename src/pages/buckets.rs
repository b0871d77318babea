//! Landing page listing the buckets visible to the signed-in user.
//!
//! Authorization is enforced by the session gate before this page is
//! reached; the page itself only reads the store for display.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppSession;
use crate::net::api::BucketSummary;

/// Bucket list page for the signed-in user.
#[component]
pub fn BucketsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();

    let greeting = move || {
        session
            .read()
            .user()
            .map_or_else(|| "Buckets".to_owned(), |user| format!("{}'s buckets", user.name))
    };

    let buckets = LocalResource::new(move || {
        let token = session.read().token().map(str::to_owned);
        async move {
            match token {
                Some(token) => crate::net::api::fetch_buckets(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="buckets-page">
            <header class="buckets-page__header">
                <h1>{greeting}</h1>
                <A href="/logout">"Sign out"</A>
            </header>
            <Suspense fallback=move || view! { <p>"Loading buckets..."</p> }>
                {move || {
                    buckets.get().map(|list: Vec<BucketSummary>| {
                        if list.is_empty() {
                            view! { <p>"No buckets yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="buckets-page__list">
                                    {list
                                        .into_iter()
                                        .map(|bucket| {
                                            let href = format!("/{}", bucket.name);
                                            view! {
                                                <li>
                                                    <A href=href>{bucket.name}</A>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
