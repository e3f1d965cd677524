//! Tv Shows page

use leptos::prelude::*;

/// Tv Shows page; exists so the active-item indicator has somewhere to go.
#[component]
pub fn TvPage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Tv Shows"</h1>
        </section>
        <div class="filler"></div>
    }
}
