//! Dashboard header
//!
//! Greeting on the left, brand mark in the centre, inert action buttons on the right.

use leptos::prelude::*;

use super::icons::{AlertIcon, BellIcon};

/// Page header shared by the dashboard compositions
#[component]
pub fn DashboardHeader(
    /// Greeting line, e.g. "Good Morning, Martin!"
    #[prop(into)]
    greeting: String,
    /// Caption under the greeting
    #[prop(into)]
    role: String,
    /// Brand mark shown in the centre
    #[prop(default = "MODU")]
    brand: &'static str,
) -> impl IntoView {
    let initial = greeting
        .rsplit(' ')
        .next()
        .and_then(|name| name.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    view! {
        <header class="dashboard-header">
            <div class="header-profile">
                <div class="avatar">
                    <span class="avatar-initial">{initial}</span>
                </div>
                <div>
                    <h3 class="header-greeting">{greeting}</h3>
                    <p class="header-role">{role}</p>
                </div>
            </div>

            <div class="header-brand">
                <h1 class="brand">{brand}</h1>
            </div>

            <div class="header-actions">
                <button class="icon-button" type="button" title="Alerts">
                    <AlertIcon />
                </button>
                <button class="icon-button" type="button" title="Notifications">
                    <BellIcon />
                </button>
                <div class="header-divider"></div>
                <img src="/assets/Icons/modu-favicon.png" alt="Logo" class="header-logo" />
            </div>
        </header>
    }
}
