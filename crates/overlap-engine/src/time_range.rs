//! Half-open clock-time intervals within a single day.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};

/// An interval `[start, end)` of clock time, `start < end`.
///
/// Ordered by `start`, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TimeRangeRepr", into = "TimeRangeRepr")]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// Build a range, rejecting `start >= end` with [`OverlapError::InvalidRange`].
    ///
    /// Both ends must fall on a whole minute; anything finer is
    /// [`OverlapError::InvalidTime`].
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        ensure_whole_minute(start)?;
        ensure_whole_minute(end)?;
        if start >= end {
            return Err(OverlapError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from hour/minute pairs, e.g. `from_hm(9, 0, 10, 30)`.
    pub fn from_hm(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Result<Self> {
        Self::new(
            clock(start_hour, start_minute)?,
            clock(end_hour, end_minute)?,
        )
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length in whole minutes. Always positive.
    pub fn duration_minutes(&self) -> i64 {
        minute_of_day(self.end) - minute_of_day(self.start)
    }

    /// Inclusive overlap test: ranges that only touch at an endpoint overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// The time common to both ranges.
    ///
    /// Returns `None` when the ranges are disjoint, and also when they only
    /// touch: a zero-length window is not a valid range and could never meet a
    /// positive minimum duration anyway.
    pub fn intersect(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeRange { start, end })
    }

    /// Same start, later end. Callers guarantee `end > self.end`.
    pub(crate) fn extend_to(self, end: NaiveTime) -> TimeRange {
        debug_assert!(end > self.end);
        TimeRange {
            start: self.start,
            end,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%I:%M %p"),
            self.end.format("%I:%M %p")
        )
    }
}

/// Parse `HH:MM` into a clock time.
pub fn parse_clock(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| OverlapError::InvalidTime(format!("'{}': {}", s, e)))
}

fn clock(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| OverlapError::InvalidTime(format!("{:02}:{:02}", hour, minute)))
}

fn ensure_whole_minute(t: NaiveTime) -> Result<()> {
    if t.second() != 0 || t.nanosecond() != 0 {
        return Err(OverlapError::InvalidTime(format!(
            "{} is not on a whole minute",
            t.format("%H:%M:%S%.f")
        )));
    }
    Ok(())
}

fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// Wire form: `{"start": "09:00", "end": "10:30"}`.
#[derive(Serialize, Deserialize)]
struct TimeRangeRepr {
    start: String,
    end: String,
}

impl TryFrom<TimeRangeRepr> for TimeRange {
    type Error = OverlapError;

    fn try_from(repr: TimeRangeRepr) -> Result<Self> {
        TimeRange::new(parse_clock(&repr.start)?, parse_clock(&repr.end)?)
    }
}

impl From<TimeRange> for TimeRangeRepr {
    fn from(range: TimeRange) -> Self {
        Self {
            start: range.start.format("%H:%M").to_string(),
            end: range.end.format("%H:%M").to_string(),
        }
    }
}
