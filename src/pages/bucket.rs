//! Single-bucket page listing the files it contains.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::AppSession;

/// File list for one bucket, identified by the `:bucket` path segment.
#[component]
pub fn BucketPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let params = use_params_map();
    let bucket = move || params.read().get("bucket").unwrap_or_default();

    let files = LocalResource::new(move || {
        let token = session.read().token().map(str::to_owned);
        let bucket = bucket();
        async move {
            match token {
                Some(token) => crate::net::api::fetch_bucket_files(&token, &bucket)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="bucket-page">
            <header class="bucket-page__header">
                <h1>{bucket}</h1>
                <A href="/">"All buckets"</A>
            </header>
            <Suspense fallback=move || view! { <p>"Loading files..."</p> }>
                {move || {
                    files.get().map(|list: Vec<String>| {
                        if list.is_empty() {
                            view! { <p>"This bucket is empty."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="bucket-page__files">
                                    {list
                                        .into_iter()
                                        .map(|file| view! { <li>{file}</li> })
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
