pub mod precise;
pub mod state;
pub mod timer;
mod tracker;

pub use precise::PreciseTimer;
pub use state::TimerState;
pub use timer::Timer;
