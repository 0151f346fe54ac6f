use std::time::Duration;

use super::tracker::PauseTracker;
use super::TimerState;
use crate::clock::{Clock, SystemClock};

/// Pausable stopwatch with millisecond resolution, driven by the wall clock.
///
/// Wall-clock adjustments while the timer runs show up in its elapsed time;
/// use [`PreciseTimer`](super::PreciseTimer) when that matters.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    tracker: PauseTracker,
}

impl Timer {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Creates a stopped timer reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        let now = clock.wall_now().timestamp_millis();
        Self {
            clock,
            tracker: PauseTracker::stopped(now),
        }
    }

    fn now_millis(&self) -> i64 {
        self.clock.wall_now().timestamp_millis()
    }

    pub fn state(&self) -> TimerState {
        self.tracker.state()
    }

    /// Starts timing from zero, whatever the current state.
    pub fn restart(&mut self) {
        let now = self.now_millis();
        self.tracker.restart(now);
        tracing::debug!("Timer restarted at {}ms", now);
    }

    /// Pauses a running timer. Ignored in any other state.
    pub fn pause(&mut self) {
        let now = self.now_millis();
        if self.tracker.pause(now) {
            tracing::debug!("Timer paused at {}ms", self.elapsed());
        } else {
            tracing::trace!("Ignoring pause while {}", self.state());
        }
    }

    /// Resumes a paused timer. Ignored in any other state.
    pub fn unpause(&mut self) {
        let now = self.now_millis();
        if self.tracker.unpause(now) {
            tracing::debug!("Timer resumed at {}ms", self.elapsed());
        } else {
            tracing::trace!("Ignoring unpause while {}", self.state());
        }
    }

    pub fn cancel(&mut self) {
        let now = self.now_millis();
        self.tracker.cancel(now);
        tracing::debug!("Timer cancelled");
    }

    /// Milliseconds spent running since the last restart. Frozen while
    /// paused, zero while stopped.
    pub fn elapsed(&self) -> u64 {
        self.tracker.elapsed(self.now_millis()) as u64
    }

    pub fn elapsed_duration(&self) -> Duration {
        Duration::from_millis(self.elapsed())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual_timer() -> (Timer<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Timer::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_new_timer_is_stopped() {
        let (timer, clock) = manual_timer();
        clock.advance(Duration::from_secs(3));

        assert!(timer.is_stopped());
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn test_running_elapsed_grows() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        assert_eq!(timer.elapsed(), 0);

        clock.advance(Duration::from_millis(250));
        assert_eq!(timer.elapsed(), 250);

        clock.advance(Duration::from_millis(250));
        assert_eq!(timer.elapsed(), 500);
        assert_eq!(timer.elapsed_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_pause_unpause_excludes_paused_time() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        clock.advance(Duration::from_millis(1000));
        timer.pause();
        clock.advance(Duration::from_millis(500));
        assert_eq!(timer.elapsed(), 1000);

        timer.unpause();
        clock.advance(Duration::from_millis(1000));
        timer.pause();
        clock.advance(Duration::from_millis(3000));

        assert!(timer.is_paused());
        assert_eq!(timer.elapsed(), 2000);
    }

    #[test]
    fn test_double_pause_is_ignored() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        clock.advance(Duration::from_millis(100));
        timer.pause();
        clock.advance(Duration::from_millis(100));
        timer.pause();
        clock.advance(Duration::from_millis(100));
        timer.unpause();

        assert_eq!(timer.elapsed(), 100);
    }

    #[test]
    fn test_double_unpause_is_ignored() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        timer.pause();
        clock.advance(Duration::from_millis(100));
        timer.unpause();
        clock.advance(Duration::from_millis(100));
        timer.unpause();
        clock.advance(Duration::from_millis(100));

        assert!(timer.is_running());
        assert_eq!(timer.elapsed(), 200);
    }

    #[test]
    fn test_unpause_while_stopped_is_ignored() {
        let (mut timer, _clock) = manual_timer();
        timer.unpause();
        assert!(timer.is_stopped());
    }

    #[test]
    fn test_cancel_running_timer() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        clock.advance(Duration::from_millis(700));
        timer.cancel();

        assert!(timer.is_stopped());
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn test_restart_while_paused_resets() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        clock.advance(Duration::from_millis(300));
        timer.pause();
        clock.advance(Duration::from_millis(300));
        timer.restart();

        assert!(timer.is_running());
        assert_eq!(timer.elapsed(), 0);
        clock.advance(Duration::from_millis(50));
        assert_eq!(timer.elapsed(), 50);
    }

    #[test]
    fn test_follows_wall_clock_jumps() {
        let (mut timer, clock) = manual_timer();
        timer.restart();
        clock.advance(Duration::from_millis(100));

        let jumped = clock.wall_now() + chrono::TimeDelta::seconds(60);
        clock.set_wall(jumped);
        assert_eq!(timer.elapsed(), 60_100);
    }
}
