//! BARK tracker sidebar

use leptos::prelude::*;

/// Navigation entries of the tracker, in display order
pub const BARK_NAV_ITEMS: [&str; 5] = ["Dashboard", "Customers", "Analytics", "Reports", "Settings"];

/// Sidebar for the BARK dashboard. Only "Dashboard" exists so far; the rest are placeholders.
#[component]
pub fn BarkSidebar(#[prop(default = "Dashboard")] active: &'static str) -> impl IntoView {
    view! {
        <div class="bark-sidebar">
            <div class="bark-sidebar-brand">
                <div class="bark-sidebar-mark"></div>
                <span class="bark-sidebar-title">"Tracker"</span>
            </div>
            <nav class="bark-sidebar-nav">
                {BARK_NAV_ITEMS
                    .into_iter()
                    .map(|label| {
                        let class = if label == active {
                            "bark-nav-item bark-nav-item--active"
                        } else {
                            "bark-nav-item"
                        };
                        view! { <div class=class>{label}</div> }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
