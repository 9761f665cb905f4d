//! Clock and calendar widget
//!
//! Holds the current wall-clock time in a local signal refreshed once per
//! second. The interval is acquired when the widget mounts in the browser and
//! released when it unmounts.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use leptos::prelude::*;

use crate::timer::{default_scheduler, IntervalScheduler, Tick};

/// Refresh period of the clock
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Hours and minutes, e.g. "09:05 AM"
pub fn time_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%I:%M %p").to_string()
}

/// Weekday, month and day, e.g. "Monday, October 19"
pub fn date_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %B %-d").to_string()
}

/// Clock & calendar card
#[component]
pub fn ClockWidget() -> impl IntoView {
    let now = RwSignal::new(Local::now());

    // Effects only run in the browser, so the server never starts an interval.
    Effect::new(move |_| {
        let tick: Tick = Box::new(move || now.set(Local::now()));
        match default_scheduler().schedule(CLOCK_PERIOD, tick) {
            Ok(guard) => {
                let guard = Mutex::new(Some(guard));
                on_cleanup(move || {
                    if let Ok(mut slot) = guard.lock() {
                        slot.take();
                    }
                });
            }
            Err(e) => tracing::warn!(error = %e, "clock interval not started"),
        }
    });

    view! {
        <div class="widget clock-widget">
            <h2 class="clock-time">{move || time_label(&now.get())}</h2>
            <p class="clock-date">{move || date_label(&now.get())}</p>
        </div>
    }
}
