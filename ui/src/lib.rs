//! Masthead demo shell - Leptos frontend
//!
//! A thin wrapper around the headless `masthead` core: the header
//! component feeds it browser events and samples its animation state
//! on requestAnimationFrame.

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::Header;
use pages::{home::HomePage, search::SearchPage, tv::TvPage};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="page">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/tv") view=TvPage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go Home"</a>
        </div>
    }
}
