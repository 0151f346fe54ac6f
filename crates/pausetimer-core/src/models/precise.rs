use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

use super::tracker::PauseTracker;
use super::TimerState;
use crate::clock::{Clock, SystemClock};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// Pausable stopwatch measured on the monotonic clock.
///
/// Durations come from monotonic readings only. The wall clock is read once
/// per restart or cancel, at the same instant as the monotonic start, and
/// absolute times are derived by adding monotonic deltas to that snapshot.
#[derive(Debug, Clone)]
pub struct PreciseTimer<C: Clock = SystemClock> {
    clock: C,
    tracker: PauseTracker,
    start_wall: DateTime<Utc>,
}

impl PreciseTimer {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PreciseTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PreciseTimer<C> {
    /// Creates a stopped timer reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        let start_wall = clock.wall_now();
        let start = clock.monotonic_nanos();
        Self {
            clock,
            tracker: PauseTracker::stopped(start),
            start_wall,
        }
    }

    pub fn state(&self) -> TimerState {
        self.tracker.state()
    }

    /// Starts timing from zero, whatever the current state.
    pub fn restart(&mut self) {
        self.start_wall = self.clock.wall_now();
        self.tracker.restart(self.clock.monotonic_nanos());
        tracing::debug!("Precise timer restarted at {}", self.start_wall);
    }

    /// Pauses a running timer. Ignored in any other state.
    pub fn pause(&mut self) {
        let now = self.clock.monotonic_nanos();
        if self.tracker.pause(now) {
            tracing::debug!("Precise timer paused at {}ns", self.elapsed_nanos());
        } else {
            tracing::trace!("Ignoring pause while {}", self.state());
        }
    }

    /// Resumes a paused timer. Ignored in any other state.
    pub fn unpause(&mut self) {
        let now = self.clock.monotonic_nanos();
        if self.tracker.unpause(now) {
            tracing::debug!("Precise timer resumed at {}ns", self.elapsed_nanos());
        } else {
            tracing::trace!("Ignoring unpause while {}", self.state());
        }
    }

    pub fn cancel(&mut self) {
        self.start_wall = self.clock.wall_now();
        self.tracker.cancel(self.clock.monotonic_nanos());
        tracing::debug!("Precise timer cancelled");
    }

    /// Nanoseconds spent running since the last restart.
    pub fn elapsed_nanos(&self) -> i64 {
        self.tracker.elapsed(self.clock.monotonic_nanos())
    }

    /// Running time at full clock resolution.
    pub fn elapsed_fine(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos() as u64)
    }

    /// Running time in whole milliseconds, truncated.
    pub fn elapsed(&self) -> u64 {
        (self.elapsed_nanos() / NANOS_PER_MILLI) as u64
    }

    /// Wall-clock instant of the most recent restart (or cancel).
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_wall
    }

    pub fn start_time_millis(&self) -> i64 {
        self.start_wall.timestamp_millis()
    }

    /// Wall-clock instant the current pause began, or `None` when not paused.
    pub fn paused_time(&self) -> Option<DateTime<Utc>> {
        let delta = TimeDelta::try_milliseconds(self.pause_offset_millis()?)?;
        self.start_wall.checked_add_signed(delta)
    }

    /// Epoch milliseconds of the current pause, `0` when not paused.
    pub fn paused_time_millis(&self) -> i64 {
        self.pause_offset_millis()
            .map(|delta| self.start_time_millis().saturating_add(delta))
            .unwrap_or(0)
    }

    // Monotonic distance from the paired start snapshot to the pause,
    // truncated to milliseconds.
    fn pause_offset_millis(&self) -> Option<i64> {
        let pause_start = self.tracker.pause_start()?;
        Some(pause_start.saturating_sub(self.tracker.start()) / NANOS_PER_MILLI)
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state() == TimerState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == TimerState::Stopped
    }
}
