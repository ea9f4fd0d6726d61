//! Timer-driven bounded counter.
//!
//! Lifecycle:
//! - `start` registers a repeating schedule (first firing one period later)
//! - each firing increments, emits one progress line, and on reaching the
//!   bound releases the schedule
//! - `cancel` releases the schedule; calling it again is a no-op

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use tickcount_core::error::Result;
use tickcount_core::{Counter, Progress, TickerState};

use crate::config::TickerSettings;
use crate::sink::ProgressSink;

pub struct Ticker<S> {
    settings: TickerSettings,
    counter: Counter,
    state: TickerState,
    schedule: Option<Interval>,
    sink: S,
}

impl<S: ProgressSink> Ticker<S> {
    pub fn new(settings: TickerSettings, sink: S) -> Result<Self> {
        Ok(Self {
            settings,
            counter: Counter::new(settings.max)?,
            state: TickerState::Idle,
            schedule: None,
            sink,
        })
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Idle -> Running. No-op in any other state.
    pub fn start(&mut self) {
        if self.state != TickerState::Idle {
            return;
        }

        let period = self.settings.period;
        let mut schedule = time::interval_at(Instant::now() + period, period);
        schedule.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.schedule = Some(schedule);
        self.state = TickerState::Running;

        tracing::info!(
            max = self.settings.max,
            period_ms = period.as_millis() as u64,
            "ticker started"
        );
    }

    /// Wait for the next firing and handle it.
    ///
    /// Returns `Ok(None)` without waiting when no schedule is registered
    /// (not started yet, or already done).
    pub async fn tick(&mut self) -> Result<Option<Progress>> {
        let Some(schedule) = self.schedule.as_mut() else {
            return Ok(None);
        };
        schedule.tick().await;

        let Some(progress) = self.counter.advance() else {
            // bound already reached; the final tick releases the schedule, so
            // this only guards against a schedule left behind
            self.cancel();
            return Ok(None);
        };

        // the increment is already committed; a resumed schedule would skip this value
        if let Err(e) = self.sink.emit(&progress).await {
            self.cancel();
            tracing::error!(value = progress.value, code = e.code().as_str(), error = %e, "emit failed");
            return Err(e);
        }
        tracing::debug!(value = progress.value, max = progress.max, "tick");

        if progress.is_final() {
            self.cancel();
            tracing::info!(value = progress.value, "ticker done");
        }

        Ok(Some(progress))
    }

    /// Start (if idle) and tick until done. Returns the last progress emitted.
    pub async fn run(&mut self) -> Result<Option<Progress>> {
        self.start();

        let mut last = None;
        while let Some(progress) = self.tick().await? {
            last = Some(progress);
        }
        Ok(last)
    }

    /// Release the schedule. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        match self.schedule.take() {
            Some(_) => {
                self.state = TickerState::Done;
                true
            }
            None => {
                tracing::debug!(state = self.state.as_str(), "cancel: no active schedule");
                false
            }
        }
    }
}
