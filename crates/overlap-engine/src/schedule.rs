//! One day's free time as a coalesced list of ranges.
//!
//! A [`DaySchedule`] always holds its ranges sorted by start with a real gap
//! between neighbours: for consecutive ranges `a, b`, `a.end < b.start`.
//! Overlapping or touching input is merged on construction and on every
//! insertion.

use std::fmt;

use serde::Serialize;

use crate::time_range::TimeRange;
use crate::weekday::Weekday;

/// The free time of one participant (or one group) on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    day: Weekday,
    ranges: Vec<TimeRange>,
}

impl DaySchedule {
    /// Build a schedule from arbitrary, possibly overlapping ranges.
    pub fn new(day: Weekday, ranges: Vec<TimeRange>) -> Self {
        Self {
            day,
            ranges: coalesce_ranges(ranges),
        }
    }

    pub fn empty(day: Weekday) -> Self {
        Self {
            day,
            ranges: Vec::new(),
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    /// The coalesced ranges, sorted by start.
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    pub fn into_ranges(self) -> Vec<TimeRange> {
        self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total free minutes on this day.
    pub fn length(&self) -> i64 {
        self.ranges.iter().map(TimeRange::duration_minutes).sum()
    }

    /// Insert a range, merging it with any neighbour it overlaps or touches.
    pub fn add_time_slot(&mut self, range: TimeRange) {
        let mut ranges = std::mem::take(&mut self.ranges);
        ranges.push(range);
        self.ranges = coalesce_ranges(ranges);
    }

    /// Re-normalize the ranges. Schedules are kept coalesced on every
    /// mutation, so this is a no-op on any value built through this API.
    pub fn coalesce(&mut self) {
        self.ranges = coalesce_ranges(std::mem::take(&mut self.ranges));
    }

    /// Keep only ranges lasting at least `min_minutes`.
    pub fn filter_min_duration(&self, min_minutes: i64) -> DaySchedule {
        Self {
            day: self.day,
            ranges: self
                .ranges
                .iter()
                .copied()
                .filter(|r| r.duration_minutes() >= min_minutes)
                .collect(),
        }
    }

    /// The time free in both schedules, tagged with this schedule's day.
    ///
    /// Both inputs are sorted and gapped, so a two-pointer sweep visits every
    /// intersecting pair in O(n + m). After each comparison the range that
    /// ends first cannot meet anything further in the other list.
    pub fn find_overlap(&self, other: &DaySchedule) -> DaySchedule {
        let (a, b) = (&self.ranges, &other.ranges);
        let mut overlap = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if let Some(common) = a[i].intersect(&b[j]) {
                overlap.push(common);
            }
            if a[i].end() <= b[j].end() {
                i += 1;
            } else {
                j += 1;
            }
        }

        DaySchedule::new(self.day, overlap)
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.day)?;
        if self.ranges.is_empty() {
            return f.write_str("unavailable");
        }
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

/// Sort by start and merge overlapping or touching ranges into a new list.
fn coalesce_ranges(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    ranges.sort();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                // Overlapping or adjacent: extend the current range.
                if range.end() > last.end() {
                    *last = last.extend_to(range.end());
                }
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
