//! Demo scripts: a sequence of timer operations and sleeps

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SCRIPT: &str =
    "restart, sleep:1000, pause, sleep:501, unpause, sleep:1001, pause, sleep:3001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Restart,
    Pause,
    Unpause,
    Cancel,
    Sleep(Duration),
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let item = s.trim().to_ascii_lowercase();

        if let Some(millis) = item.strip_prefix("sleep:") {
            let millis = millis.trim();
            let millis: u64 = millis.parse().map_err(|source| Error::InvalidDuration {
                value: millis.to_string(),
                source,
            })?;
            return Ok(Step::Sleep(Duration::from_millis(millis)));
        }

        match item.as_str() {
            "restart" => Ok(Step::Restart),
            "pause" => Ok(Step::Pause),
            "unpause" => Ok(Step::Unpause),
            "cancel" => Ok(Step::Cancel),
            _ => Err(Error::InvalidStep(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Restart => f.write_str("restart"),
            Step::Pause => f.write_str("pause"),
            Step::Unpause => f.write_str("unpause"),
            Step::Cancel => f.write_str("cancel"),
            Step::Sleep(duration) => write!(f, "sleep:{}", duration.as_millis()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyScript);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total time spent sleeping when the script runs.
    pub fn total_sleep(&self) -> Duration {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Sleep(duration) => Some(*duration),
                _ => None,
            })
            .sum()
    }
}

impl Default for Script {
    fn default() -> Self {
        Self {
            steps: vec![
                Step::Restart,
                Step::Sleep(Duration::from_millis(1000)),
                Step::Pause,
                Step::Sleep(Duration::from_millis(501)),
                Step::Unpause,
                Step::Sleep(Duration::from_millis(1001)),
                Step::Pause,
                Step::Sleep(Duration::from_millis(3001)),
            ],
        }
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let steps = s
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Step>>>()?;
        Self::new(steps)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
