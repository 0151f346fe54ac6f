//! PauseTimer Core
//!
//! Pausable stopwatches: a coarse wall-clock `Timer` and a monotonic
//! `PreciseTimer`, both reading time through an injectable `Clock`.

pub mod clock;
pub mod models;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::{PreciseTimer, Timer, TimerState};
