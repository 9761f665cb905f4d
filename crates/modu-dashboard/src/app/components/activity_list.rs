//! Recent activity widget

use leptos::prelude::*;

use crate::catalog::ActivityEntry;

/// At most this many entries are shown
pub const MAX_VISIBLE_ACTIVITY: usize = 5;

/// Text shown when there is nothing to list
pub const EMPTY_ACTIVITY_TEXT: &str = "NO RECENT ACTIVITY";

/// The leading entries that fit in the widget, in their original order
pub fn visible_entries(entries: &[ActivityEntry]) -> &[ActivityEntry] {
    &entries[..entries.len().min(MAX_VISIBLE_ACTIVITY)]
}

/// "Recents" card listing the newest activity entries
#[component]
pub fn ActivityList(
    /// Backing entries, newest first
    entries: Vec<ActivityEntry>,
    /// Card heading
    #[prop(default = "Recents")]
    title: &'static str,
) -> impl IntoView {
    let body = if entries.is_empty() {
        view! {
            <div class="activity-empty">
                <span>{EMPTY_ACTIVITY_TEXT}</span>
            </div>
        }
        .into_any()
    } else {
        visible_entries(&entries)
            .iter()
            .cloned()
            .map(|entry| {
                view! {
                    <div class="activity-item">
                        <div class="activity-item-header">
                            <span class="activity-source">{entry.source_app}</span>
                            <span class="activity-time">{entry.relative_time}</span>
                        </div>
                        <p class="activity-text">{entry.text}</p>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="widget activity-widget">
            <div class="widget-header">
                <h3 class="widget-title">{title}</h3>
                <div class="pulse-dot"></div>
            </div>
            <div class="activity-list">{body}</div>
        </div>
    }
}
