//! Application card feed
//!
//! Renders the catalog, in order, as cards inside a vertically snapping scroll
//! container. A card's action button is enabled only for `LIVE` applications.

use leptos::prelude::*;

use crate::catalog::{Application, Badge};

/// What a card's action button shows and whether it can be pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionControl {
    pub label: &'static str,
    pub enabled: bool,
}

impl ActionControl {
    pub fn for_badge(badge: Badge) -> Self {
        if badge.allows_launch() {
            Self {
                label: "START APPLICATION",
                enabled: true,
            }
        } else {
            Self {
                label: "COMING SOON",
                enabled: false,
            }
        }
    }
}

fn badge_class(badge: Badge) -> &'static str {
    match badge {
        Badge::Live => "badge badge--live",
        Badge::Offline => "badge badge--offline",
    }
}

/// A single application card
#[component]
pub fn AppCard(app: Application) -> impl IntoView {
    let action = ActionControl::for_badge(app.badge);
    let button_class = if action.enabled {
        "app-action app-action--ready"
    } else {
        "app-action app-action--locked"
    };
    let logo_alt = format!("{} logo", app.name);

    view! {
        <div class="app-card" data-app=app.id>
            <div class="app-card-header">
                <div class="app-card-identity">
                    <div class="app-logo">
                        <img src=app.logo alt=logo_alt />
                    </div>
                    <div>
                        <h2 class="app-name">{app.name}</h2>
                        <span class=badge_class(app.badge)>{app.badge.label()}</span>
                    </div>
                </div>
                <p class="app-version">{app.version}</p>
            </div>

            <div class="app-body">
                <p class="app-tagline">{app.tagline}</p>
                <p class="app-description">{app.description}</p>
            </div>

            <div class="app-footer">
                <button class=button_class type="button" disabled=!action.enabled>
                    {action.label}
                </button>
            </div>
        </div>
    }
}

/// Snap-scrolling stack of application cards
#[component]
pub fn ToolScroller(applications: Vec<Application>) -> impl IntoView {
    view! {
        <div class="tool-scroller">
            <div class="tool-scroller-spacer"></div>
            {applications
                .into_iter()
                .map(|app| view! { <AppCard app=app /> })
                .collect_view()}
        </div>
    }
}
