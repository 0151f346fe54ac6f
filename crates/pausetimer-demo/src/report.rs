//! Results printed at the end of a demo run

use chrono::{DateTime, Local, Utc};
use pausetimer_core::{Clock, PreciseTimer, Timer};
use serde::Serialize;

use crate::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub state: String,
    pub elapsed_ms: u64,
    pub precise_elapsed_ms: u64,
    pub precise_elapsed_ns: i64,
    pub start_time_ms: i64,
    pub paused_time_ms: i64,
    pub start_time: DateTime<Utc>,
    pub paused_time: Option<DateTime<Utc>>,
}

impl Report {
    pub fn capture<C: Clock>(timer: &Timer<C>, precise: &PreciseTimer<C>) -> Self {
        Self {
            state: precise.state().to_string(),
            elapsed_ms: timer.elapsed(),
            precise_elapsed_ms: precise.elapsed(),
            precise_elapsed_ns: precise.elapsed_nanos(),
            start_time_ms: precise.start_time_millis(),
            paused_time_ms: precise.paused_time_millis(),
            start_time: precise.start_time(),
            paused_time: precise.paused_time(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let paused = self
            .paused_time
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());

        [
            format!("state: {}", self.state),
            format!("elapsed: {}ms", self.elapsed_ms),
            format!(
                "precise elapsed: {}ms ({}ns)",
                self.precise_elapsed_ms, self.precise_elapsed_ns
            ),
            format!("start time: {}", self.start_time_ms),
            format!("paused time: {}", self.paused_time_ms),
            format!("{}, {}", format_timestamp(self.start_time), paused),
        ]
        .join("\n")
    }
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}
