//! Error types for overlap-engine operations.
//!
//! Only malformed input is an error. A day with too few available
//! participants, or an intersection that collapses to nothing, is a normal
//! empty result and never surfaces here.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    /// A time range was built with `start >= end`.
    #[error("Invalid range: start {start} must be before end {end}")]
    InvalidRange { start: NaiveTime, end: NaiveTime },

    /// Group finder knobs out of bounds (non-positive duration, zero group size).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A clock time is not a whole-minute `HH:MM`.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid roster: {0}")]
    Roster(String),

    #[error("Invalid config file: {0}")]
    Config(String),

    /// A report could not be encoded.
    #[error("Failed to encode report: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OverlapError>;
