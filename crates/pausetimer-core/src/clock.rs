//! Time sources used by the timers

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Source of the current time.
///
/// Wall-clock readings are calendar time and may jump when the system clock
/// is adjusted. Monotonic readings never go backwards but their origin is
/// arbitrary, so only differences between two monotonic readings carry
/// meaning.
pub trait Clock {
    /// Current calendar time.
    fn wall_now(&self) -> DateTime<Utc>;

    /// Nanoseconds since an arbitrary, fixed origin.
    fn monotonic_nanos(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn wall_now(&self) -> DateTime<Utc> {
        (**self).wall_now()
    }

    fn monotonic_nanos(&self) -> i64 {
        (**self).monotonic_nanos()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn wall_now(&self) -> DateTime<Utc> {
        (**self).wall_now()
    }

    fn monotonic_nanos(&self) -> i64 {
        (**self).monotonic_nanos()
    }
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

fn monotonic_origin() -> Instant {
    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    *ORIGIN.get_or_init(Instant::now)
}

impl Clock for SystemClock {
    fn wall_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn monotonic_nanos(&self) -> i64 {
        let nanos = monotonic_origin().elapsed().as_nanos();
        i64::try_from(nanos).unwrap_or(i64::MAX)
    }
}

#[derive(Debug, Default)]
struct ManualReadings {
    wall_nanos: AtomicI64,
    monotonic_nanos: AtomicI64,
}

/// A clock that only moves when told to.
///
/// Clones share the same readings, so a test can hand one handle to a timer
/// and keep another to advance time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    readings: Arc<ManualReadings>,
}

impl ManualClock {
    /// Wall time at the Unix epoch, monotonic reading at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(wall: DateTime<Utc>) -> Self {
        let clock = Self::new();
        clock.set_wall(wall);
        clock
    }

    /// Moves both readings forward by `by`.
    pub fn advance(&self, by: Duration) {
        let nanos = i64::try_from(by.as_nanos()).unwrap_or(i64::MAX);
        self.readings.wall_nanos.fetch_add(nanos, Ordering::SeqCst);
        self.readings
            .monotonic_nanos
            .fetch_add(nanos, Ordering::SeqCst);
    }

    /// Jumps the wall clock without touching the monotonic reading.
    pub fn set_wall(&self, wall: DateTime<Utc>) {
        let nanos = wall
            .timestamp_nanos_opt()
            .unwrap_or_else(|| wall.timestamp_millis().saturating_mul(1_000_000));
        self.readings.wall_nanos.store(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn wall_now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.readings.wall_nanos.load(Ordering::SeqCst))
    }

    fn monotonic_nanos(&self) -> i64 {
        self.readings.monotonic_nanos.load(Ordering::SeqCst)
    }
}
