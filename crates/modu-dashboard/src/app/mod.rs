//! MODU Dashboard Application Shell
//!
//! Leptos 0.8 application with routing for the dashboard pages.

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    StaticSegment,
};

use crate::catalog::DataSource;
use crate::routes::{redirect_target, Page};
use components::Navbar;
use pages::{ApiStatus, BarkDashboard, Dashboard};

/// Shell component providing HTML structure for both SSR and hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Main application component with router setup.
///
/// Route paths come from [`Page`]. Anything else, `/` included, is sent on to
/// [`crate::routes::redirect_target`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(DataSource::mock());

    view! {
        <Stylesheet id="leptos" href="/pkg/modu-dashboard.css" />
        <Title text="MODU" />

        <Router>
            <main class="page">
                <Navbar />
                <Routes fallback=UnmatchedRoute>
                    <Route path=StaticSegment(Page::Dashboard.segment()) view=Dashboard />
                    <Route path=StaticSegment(Page::Bark.segment()) view=BarkDashboard />
                    <Route path=StaticSegment(Page::Status.segment()) view=ApiStatus />
                </Routes>
            </main>
        </Router>
    }
}

/// Client-side redirect for paths the router does not know
#[component]
fn UnmatchedRoute() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    view! { <Redirect path=redirect_target(&pathname) /> }
}
