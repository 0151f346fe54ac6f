//! Pause bookkeeping shared by both timer variants.
//!
//! Readings are raw clock ticks in whatever unit the owning timer uses;
//! the tracker never reads a clock itself.

use super::TimerState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PauseTracker {
    state: TimerState,
    start: i64,
    pause_accum: i64,
    // Zero unless paused.
    pause_start: i64,
}

impl PauseTracker {
    pub(crate) fn stopped(now: i64) -> Self {
        Self {
            state: TimerState::Stopped,
            start: now,
            pause_accum: 0,
            pause_start: 0,
        }
    }

    pub(crate) fn state(&self) -> TimerState {
        self.state
    }

    pub(crate) fn start(&self) -> i64 {
        self.start
    }

    pub(crate) fn pause_start(&self) -> Option<i64> {
        (self.state == TimerState::Paused).then_some(self.pause_start)
    }

    pub(crate) fn restart(&mut self, now: i64) {
        self.state = TimerState::Running;
        self.start = now;
        self.pause_accum = 0;
        self.pause_start = 0;
    }

    pub(crate) fn cancel(&mut self, now: i64) {
        *self = Self::stopped(now);
    }

    /// Returns false when the timer was not running.
    pub(crate) fn pause(&mut self, now: i64) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.state = TimerState::Paused;
        self.pause_start = now;
        true
    }

    /// Returns false when the timer was not paused.
    pub(crate) fn unpause(&mut self, now: i64) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }

        self.pause_accum += now.saturating_sub(self.pause_start).max(0);
        self.pause_start = 0;
        self.state = TimerState::Running;
        true
    }

    /// Running time since the last restart, minus time spent paused.
    pub(crate) fn elapsed(&self, now: i64) -> i64 {
        let end = match self.state {
            TimerState::Running => now,
            TimerState::Paused => self.pause_start,
            TimerState::Stopped => return 0,
        };

        end.saturating_sub(self.start)
            .saturating_sub(self.pause_accum)
            .max(0)
    }
}
