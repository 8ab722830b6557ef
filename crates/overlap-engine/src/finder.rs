//! Find, for each weekday, a group of participants with common free time.
//!
//! For every day independently:
//!
//! 1. Every availability is first cut down to ranges of at least
//!    `min_slot_duration` minutes. This happens once, on private copies,
//!    before any day is examined.
//! 2. The candidates are the participants still free that day, in input order.
//! 3. Fewer than `min_group_size` candidates means no group.
//! 4. Otherwise the candidates' schedules for that day are intersected left to
//!    right. A group is reported only if some common time survives.
//!
//! Intersection is commutative and associative on sets of ranges, so the
//! order of participants never changes the common availability.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::config::FinderConfig;
use crate::error::Result;
use crate::participant::Participant;
use crate::schedule::DaySchedule;
use crate::weekday::Weekday;
use crate::weekly::WeeklyAvailability;

/// A day on which enough participants share free time.
///
/// Borrows the participants it names; `common_availability` is owned.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupCandidate<'a> {
    pub day: Weekday,
    pub members: Vec<&'a Participant>,
    pub common_availability: DaySchedule,
}

impl GroupCandidate<'_> {
    /// Minutes of common free time.
    pub fn common_minutes(&self) -> i64 {
        self.common_availability.length()
    }
}

/// Weekday → at most one [`GroupCandidate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupSchedule<'a> {
    days: [Option<GroupCandidate<'a>>; 7],
}

impl<'a> GroupSchedule<'a> {
    pub fn get(&self, day: Weekday) -> Option<&GroupCandidate<'a>> {
        self.days[day.index()].as_ref()
    }

    /// Qualifying candidates, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = &GroupCandidate<'a>> {
        self.days.iter().flatten()
    }

    /// Number of days with a group.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }

    fn insert(&mut self, candidate: GroupCandidate<'a>) {
        let index = candidate.day.index();
        self.days[index] = Some(candidate);
    }
}

/// Serialized as a map keyed by weekday, containing only days with a group.
impl Serialize for GroupSchedule<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for candidate in self.iter() {
            map.serialize_entry(&candidate.day, candidate)?;
        }
        map.end()
    }
}

/// How [`GroupFinder::search`] spreads the seven days over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Sequential,
    /// One scoped thread per weekday.
    Parallel,
}

/// Group search with a validated configuration.
#[derive(Debug, Clone, Copy)]
pub struct GroupFinder {
    config: FinderConfig,
}

impl GroupFinder {
    /// Fails with `InvalidConfiguration` before any work is done.
    pub fn new(config: FinderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn search<'a>(&self, participants: &'a [Participant], mode: SearchMode) -> GroupSchedule<'a> {
        match mode {
            SearchMode::Sequential => self.find_groups(participants),
            SearchMode::Parallel => self.find_groups_parallel(participants),
        }
    }

    /// Search all seven days on the calling thread.
    pub fn find_groups<'a>(&self, participants: &'a [Participant]) -> GroupSchedule<'a> {
        let filtered = self.filter_availability(participants);

        let mut schedule = GroupSchedule::default();
        for day in Weekday::ALL {
            if let Some(candidate) = self.find_for_day(day, participants, &filtered) {
                schedule.insert(candidate);
            }
        }

        self.log_summary(participants.len(), &schedule);
        schedule
    }

    /// Search the seven days on scoped threads, one per day.
    ///
    /// Produces exactly the same result as [`GroupFinder::find_groups`]. The
    /// workers share the participants and the filtered availabilities
    /// read-only.
    pub fn find_groups_parallel<'a>(&self, participants: &'a [Participant]) -> GroupSchedule<'a> {
        let filtered = self.filter_availability(participants);

        let found: Vec<Option<GroupCandidate<'a>>> = std::thread::scope(|scope| {
            let workers: Vec<_> = Weekday::ALL
                .into_iter()
                .map(|day| {
                    let filtered = &filtered;
                    scope.spawn(move || self.find_for_day(day, participants, filtered))
                })
                .collect();

            workers
                .into_iter()
                .map(|worker| worker.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        let mut schedule = GroupSchedule::default();
        for candidate in found.into_iter().flatten() {
            schedule.insert(candidate);
        }

        self.log_summary(participants.len(), &schedule);
        schedule
    }

    /// Drop every range shorter than the minimum slot, per participant.
    fn filter_availability(&self, participants: &[Participant]) -> Vec<WeeklyAvailability> {
        participants
            .iter()
            .map(|p| {
                p.availability
                    .filter_by_minimum_duration(self.config.min_slot_duration)
            })
            .collect()
    }

    fn find_for_day<'a>(
        &self,
        day: Weekday,
        participants: &'a [Participant],
        filtered: &[WeeklyAvailability],
    ) -> Option<GroupCandidate<'a>> {
        let available: Vec<(&'a Participant, &DaySchedule)> = participants
            .iter()
            .zip(filtered)
            .filter(|(_, week)| week.is_available(day))
            .map(|(participant, week)| (participant, week.day(day)))
            .collect();

        if available.len() < self.config.min_group_size {
            debug!(
                %day,
                available = available.len(),
                required = self.config.min_group_size,
                "too few participants available"
            );
            return None;
        }

        let mut schedules = available.iter().map(|(_, schedule)| *schedule);
        let first = schedules.next()?.clone();
        let common = schedules.fold(first, |common, schedule| {
            if common.is_empty() {
                common
            } else {
                common.find_overlap(schedule)
            }
        });

        if common.length() == 0 {
            debug!(%day, available = available.len(), "no common free time");
            return None;
        }

        debug!(
            %day,
            members = available.len(),
            minutes = common.length(),
            "group found"
        );
        Some(GroupCandidate {
            day,
            members: available.into_iter().map(|(participant, _)| participant).collect(),
            common_availability: common,
        })
    }

    fn log_summary(&self, participants: usize, schedule: &GroupSchedule<'_>) {
        info!(
            participants,
            days = schedule.len(),
            min_slot_duration = self.config.min_slot_duration,
            min_group_size = self.config.min_group_size,
            "group search complete"
        );
    }
}

/// Validate `config` and search all days sequentially.
pub fn find_groups<'a>(
    participants: &'a [Participant],
    config: FinderConfig,
) -> Result<GroupSchedule<'a>> {
    Ok(GroupFinder::new(config)?.find_groups(participants))
}
