//! BARK dashboard page

use leptos::prelude::*;

use crate::app::components::{ActivityList, BarkSidebar, DashboardHeader, InsightPanel};
use crate::catalog::{ActivityEntry, DataSource};

/// Application name BARK activity is tagged with
const BARK_SOURCE: &str = "BARK";

/// Activity produced by the BARK tracker, order preserved
pub fn bark_activity(entries: Vec<ActivityEntry>) -> Vec<ActivityEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.source_app.eq_ignore_ascii_case(BARK_SOURCE))
        .collect()
}

/// Secondary dashboard for the BARK repair tracker
#[component]
pub fn BarkDashboard() -> impl IntoView {
    let data = use_context::<DataSource>().unwrap_or_default();

    view! {
        <div class="dashboard dashboard--bark">
            <DashboardHeader greeting="Good Morning, Martin!" role="Cloud Engineer" brand="BARK" />

            <div class="bark-layout">
                <BarkSidebar />
                <main class="bark-main">
                    <h1 class="page-title">"Dashboard"</h1>
                    <div class="bark-widgets">
                        <InsightPanel />
                        <ActivityList entries=bark_activity(data.recent_activity()) title="BARK Activity" />
                    </div>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bark_activity_filters_by_source() {
        let entries = bark_activity(DataSource::mock().recent_activity());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.source_app == "BARK"));
        assert_eq!(entries[0].id, 1);
    }
}
