//! PauseTimer demo library
//!
//! Script parsing, the script runner and report rendering, kept out of the
//! binary so they can be tested.

pub mod error;
pub mod report;
pub mod runner;
pub mod script;

pub use error::{Error, Result};
pub use report::Report;
pub use runner::run;
pub use script::{Script, Step};
