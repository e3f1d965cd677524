//! Home page

use leptos::prelude::*;

/// Landing page; tall enough to scroll the header through its zones.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Home"</h1>
            <p>"Scroll down to watch the header backdrop fade in."</p>
        </section>
        <div class="filler"></div>
    }
}
