//! Primary dashboard page
//!
//! Header plus a three-column grid: clock and recents on the left, the
//! application feed in the centre, insights and the call to action on the right.

use leptos::prelude::*;

use crate::app::components::{
    ActivityList, ClockWidget, CtaPanel, DashboardHeader, InsightPanel, ToolScroller,
};
use crate::catalog::DataSource;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let data = use_context::<DataSource>().unwrap_or_default();

    view! {
        <div class="dashboard">
            <div class="dashboard-backdrop"></div>
            <DashboardHeader greeting="Good Morning, Martin!" role="Cloud Engineer" />

            <div class="dashboard-grid">
                <aside class="dashboard-column">
                    <ClockWidget />
                    <ActivityList entries=data.recent_activity() />
                </aside>

                <main class="dashboard-center">
                    <div class="dashboard-guide-line"></div>
                    <ToolScroller applications=data.applications() />
                </main>

                <aside class="dashboard-column">
                    <InsightPanel />
                    <CtaPanel />
                </aside>
            </div>
        </div>
    }
}
