//! Search results page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Echoes the keyword the header dispatched to `/search?keyword=...`.
#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let keyword = move || query.get().get("keyword").unwrap_or_default();

    view! {
        <section class="hero">
            <h1>"Search"</h1>
            <p>"Results for: " <strong>{keyword}</strong></p>
        </section>
    }
}
