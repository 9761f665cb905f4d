//! Tool insights widget
//!
//! Static headline numbers for the live tools, each with an optional trend note
//! and progress bar.

use leptos::prelude::*;

/// One headline number in the insights card
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub value: String,
    pub label: String,
    /// Short note beside the value, e.g. "+2 today"
    pub note: Option<String>,
    /// Fill of the progress bar, in percent
    pub progress: Option<f64>,
}

impl Insight {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            note: None,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_progress(mut self, percent: f64) -> Self {
        self.progress = Some(percent);
        self
    }
}

/// The insights shown until real metrics are wired in
pub fn default_insights() -> Vec<Insight> {
    vec![
        Insight::new("25", "Bark Active Repairs")
            .with_note("+2 today")
            .with_progress(60.0),
        Insight::new("40", "Estimates This Month").with_note("Total"),
    ]
}

/// Inline style for a progress fill, clamped to 0-100%
pub fn progress_style(percent: f64) -> String {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    format!("width: {clamped}%")
}

/// Month-over-month change, e.g. "↑ 15%" or "↓ 3.5%"
pub fn format_change(percent: f64) -> String {
    let arrow = if percent < 0.0 { '↓' } else { '↑' };
    format!("{arrow} {}%", percent.abs())
}

/// Tool insights card
#[component]
pub fn InsightPanel(
    #[prop(default = default_insights())] insights: Vec<Insight>,
    /// Month-over-month income change in percent
    #[prop(default = 15.0)]
    income_change: f64,
) -> impl IntoView {
    let rows = insights
        .into_iter()
        .map(|insight| {
            view! {
                <div class="insight">
                    <div class="insight-header">
                        <span class="insight-value">{insight.value}</span>
                        {insight.note.map(|note| view! { <span class="insight-note">{note}</span> })}
                    </div>
                    <p class="insight-label">{insight.label}</p>
                    {insight.progress.map(|percent| view! {
                        <div class="insight-bar">
                            <div class="insight-bar-fill" style=progress_style(percent)></div>
                        </div>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="widget insight-widget">
            <h3 class="widget-title">"Tool Insights"</h3>
            <div class="insight-list">
                {rows}
                <div class="insight insight-income">
                    <div class="insight-header">
                        <span class="insight-income-label">"Income"</span>
                        <span class="insight-change">{format_change(income_change)}</span>
                    </div>
                    <p class="insight-caption">"Compared to last month"</p>
                </div>
            </div>
        </div>
    }
}
