//! Scoped recurring tasks
//!
//! Widgets that refresh on a timer acquire an [`IntervalGuard`] when they mount and
//! drop it when they unmount. Dropping (or cancelling) the guard stops the task, so
//! no tick can fire after the owning widget is gone.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Errors raised when registering a recurring task
#[derive(Debug, Error)]
pub enum TimerError {
    /// A zero period would spin forever
    #[error("interval period must be non-zero")]
    ZeroPeriod,

    /// The host refused to register the interval
    #[error("failed to register interval: {0}")]
    Register(String),
}

/// Callback run on every tick
pub type Tick = Box<dyn FnMut() + Send + 'static>;

/// Ownership of a running interval. The interval stops when this is dropped.
#[must_use = "dropping the guard cancels the interval immediately"]
pub struct IntervalGuard {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl IntervalGuard {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the interval now
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for IntervalGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalGuard")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Something that can run a callback every `period`
pub trait IntervalScheduler {
    /// Start calling `tick` every `period`. The first call happens one period
    /// after scheduling.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero or the host cannot register the task.
    fn schedule(&self, period: Duration, tick: Tick) -> Result<IntervalGuard, TimerError>;
}

/// Browser intervals (`setInterval`), via the Leptos DOM helpers
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl IntervalScheduler for BrowserScheduler {
    fn schedule(&self, period: Duration, tick: Tick) -> Result<IntervalGuard, TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }

        let tick = std::cell::RefCell::new(tick);
        let handle = leptos::leptos_dom::helpers::set_interval_with_handle(
            move || (tick.borrow_mut().as_mut())(),
            period,
        )
        .map_err(|e| TimerError::Register(format!("{e:?}")))?;

        Ok(IntervalGuard::new(move || handle.clear()))
    }
}

/// Intervals on the ambient tokio runtime
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl IntervalScheduler for TokioScheduler {
    fn schedule(&self, period: Duration, mut tick: Tick) -> Result<IntervalGuard, TimerError> {
        use tokio::time::{interval_at, Instant, MissedTickBehavior};

        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| TimerError::Register(e.to_string()))?;

        let task = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick();
            }
        });

        Ok(IntervalGuard::new(move || task.abort()))
    }
}

/// Scheduler for the current target
#[cfg(target_arch = "wasm32")]
pub fn default_scheduler() -> BrowserScheduler {
    BrowserScheduler
}

/// Scheduler for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn default_scheduler() -> TokioScheduler {
    TokioScheduler
}
