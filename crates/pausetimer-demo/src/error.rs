//! Error types for the demo

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid step: '{0}'")]
    InvalidStep(String),

    #[error("Invalid sleep duration '{value}': {source}")]
    InvalidDuration {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("Script has no steps")]
    EmptyScript,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
