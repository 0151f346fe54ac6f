//! Drives a pair of timers through a script

use pausetimer_core::{Clock, PreciseTimer, Timer};
use std::time::Duration;

use crate::{Report, Script, Step};

/// Applies every step to both timers, calling `sleep` for sleep steps, and
/// reports where the timers ended up.
pub fn run<C, F>(
    script: &Script,
    timer: &mut Timer<C>,
    precise: &mut PreciseTimer<C>,
    mut sleep: F,
) -> Report
where
    C: Clock,
    F: FnMut(Duration),
{
    for step in script.steps() {
        tracing::info!("Step: {}", step);
        match step {
            Step::Restart => {
                timer.restart();
                precise.restart();
            }
            Step::Pause => {
                timer.pause();
                precise.pause();
            }
            Step::Unpause => {
                timer.unpause();
                precise.unpause();
            }
            Step::Cancel => {
                timer.cancel();
                precise.cancel();
            }
            Step::Sleep(duration) => sleep(*duration),
        }
    }

    Report::capture(timer, precise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pausetimer_core::{ManualClock, TimerState};

    const START_MILLIS: i64 = 1_600_000_000_000;

    fn run_simulated(script: &Script) -> (Report, Timer<ManualClock>) {
        let start = DateTime::from_timestamp_millis(START_MILLIS).unwrap();
        let clock = ManualClock::starting_at(start);
        let mut timer = Timer::with_clock(clock.clone());
        let mut precise = PreciseTimer::with_clock(clock.clone());

        let report = run(script, &mut timer, &mut precise, |d| clock.advance(d));
        (report, timer)
    }

    #[test]
    fn test_default_script() {
        let (report, timer) = run_simulated(&Script::default());

        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(report.elapsed_ms, 2001);
        assert_eq!(report.precise_elapsed_ns, 2_001_000_000);
        assert_eq!(report.start_time_ms, START_MILLIS);
        assert_eq!(report.paused_time_ms, START_MILLIS + 2502);
    }

    #[test]
    fn test_cancel_script() {
        let script: Script = "restart, sleep:500, cancel, sleep:100".parse().unwrap();
        let (report, timer) = run_simulated(&script);

        assert!(timer.is_stopped());
        assert_eq!(report.state, "stopped");
        assert_eq!(report.elapsed_ms, 0);
        assert_eq!(report.paused_time, None);
    }

    #[test]
    fn test_sleeps_are_forwarded() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(clock.clone());
        let mut precise = PreciseTimer::with_clock(clock.clone());
        let mut slept = Vec::new();

        let script: Script = "sleep:5, restart, sleep:7".parse().unwrap();
        run(&script, &mut timer, &mut precise, |d| slept.push(d));

        assert_eq!(
            slept,
            vec![Duration::from_millis(5), Duration::from_millis(7)]
        );
    }
}
