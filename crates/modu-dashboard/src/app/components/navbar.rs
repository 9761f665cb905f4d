//! Navigation bar component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Page;

/// Top navigation linking every page in the route table
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="logo">"MODU"</div>
            <div class="links">
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <A href=page.path()>{page.title()}</A> })
                    .collect_view()}
            </div>
        </nav>
    }
}
