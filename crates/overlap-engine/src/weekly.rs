//! A participant's free time across the whole week.
//!
//! [`WeeklyAvailability`] stores one [`DaySchedule`] per weekday in a fixed
//! array indexed by [`Weekday::index`], so every day is always present. Days
//! with no free time hold an empty schedule. Filtering and intersection
//! return new values; nothing mutates a week after construction.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schedule::DaySchedule;
use crate::time_range::TimeRange;
use crate::weekday::Weekday;

/// Wire form: weekday name → ranges. Empty days are omitted on output and
/// treated as empty on input.
type WeekRepr = BTreeMap<Weekday, Vec<TimeRange>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeekRepr", into = "WeekRepr")]
pub struct WeeklyAvailability {
    week: [DaySchedule; 7],
    total_minutes: i64,
}

impl WeeklyAvailability {
    /// Build a week from a partial set of day schedules.
    ///
    /// Missing days become empty. Two schedules for the same day are merged.
    pub fn new(days: impl IntoIterator<Item = DaySchedule>) -> Self {
        Self::from_ranges(days.into_iter().flat_map(|schedule| {
            let day = schedule.day();
            schedule.into_ranges().into_iter().map(move |range| (day, range))
        }))
    }

    /// Build a week from `(day, range)` pairs in any order.
    pub fn from_ranges(ranges: impl IntoIterator<Item = (Weekday, TimeRange)>) -> Self {
        let mut buckets: [Vec<TimeRange>; 7] = Default::default();
        for (day, range) in ranges {
            buckets[day.index()].push(range);
        }
        Self::from_week(Weekday::ALL.map(|day| {
            DaySchedule::new(day, std::mem::take(&mut buckets[day.index()]))
        }))
    }

    /// A week with no free time at all.
    pub fn empty() -> Self {
        Self::from_week(Weekday::ALL.map(DaySchedule::empty))
    }

    fn from_week(week: [DaySchedule; 7]) -> Self {
        let total_minutes = week.iter().map(DaySchedule::length).sum();
        Self {
            week,
            total_minutes,
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.week[day.index()]
    }

    /// All seven schedules, Monday first.
    pub fn days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.week.iter()
    }

    /// Days with any free time, Monday first.
    pub fn available_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL
            .into_iter()
            .filter(move |day| self.is_available(*day))
    }

    pub fn is_available(&self, day: Weekday) -> bool {
        self.day(day).length() > 0
    }

    /// Total free minutes across the week.
    pub fn total_length(&self) -> i64 {
        self.total_minutes
    }

    /// Keep only ranges lasting at least `min_minutes`.
    pub fn filter_by_minimum_duration(&self, min_minutes: i64) -> WeeklyAvailability {
        Self::from_week(Weekday::ALL.map(|day| self.day(day).filter_min_duration(min_minutes)))
    }

    /// Time free in both weeks, day by day.
    ///
    /// A day empty on either side is empty in the result without comparing
    /// ranges.
    pub fn intersect(&self, other: &WeeklyAvailability) -> WeeklyAvailability {
        Self::from_week(Weekday::ALL.map(|day| {
            if self.is_available(day) && other.is_available(day) {
                self.day(day).find_overlap(other.day(day))
            } else {
                DaySchedule::empty(day)
            }
        }))
    }
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for WeeklyAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, schedule) in self.week.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", schedule)?;
        }
        Ok(())
    }
}

impl From<WeekRepr> for WeeklyAvailability {
    fn from(repr: WeekRepr) -> Self {
        Self::from_ranges(
            repr.into_iter()
                .flat_map(|(day, ranges)| ranges.into_iter().map(move |r| (day, r))),
        )
    }
}

impl From<WeeklyAvailability> for WeekRepr {
    fn from(week: WeeklyAvailability) -> Self {
        week.week
            .into_iter()
            .filter(|schedule| !schedule.is_empty())
            .map(|schedule| (schedule.day(), schedule.into_ranges()))
            .collect()
    }
}
