//! # overlap-engine
//!
//! Find the days and times when enough people are free together.
//!
//! Each participant supplies a weekly availability: free time ranges per
//! day of week. The engine coalesces each participant's ranges, drops windows
//! shorter than a minimum meeting length, and intersects the remaining free
//! time across everyone available on a given day. A day qualifies when at
//! least `min_group_size` participants are free and some window survives the
//! intersection.
//!
//! ## Quick start
//!
//! ```rust
//! use overlap_engine::{find_groups, FinderConfig, Participant, TimeRange, Weekday, WeeklyAvailability};
//!
//! let free = |sh, sm, eh, em| {
//!     WeeklyAvailability::from_ranges([(Weekday::Monday, TimeRange::from_hm(sh, sm, eh, em).unwrap())])
//! };
//! let people = vec![
//!     Participant::new("Ana", "ana@example.edu", free(9, 0, 10, 30)),
//!     Participant::new("Ben", "ben@example.edu", free(9, 30, 11, 0)),
//! ];
//!
//! let groups = find_groups(&people, FinderConfig::new(30, 2)).unwrap();
//! let monday = groups.get(Weekday::Monday).unwrap();
//! assert_eq!(monday.common_minutes(), 60);
//! ```
//!
//! ## Modules
//!
//! - [`weekday`] - Day-of-week tag with explicit rank
//! - [`time_range`] - Validated clock-time intervals
//! - [`schedule`] - One day's coalesced free time
//! - [`weekly`] - Seven-day availability, filtering and intersection
//! - [`participant`] - Identity plus availability
//! - [`finder`] - Per-day group search
//! - [`config`] - Finder knobs, TOML loading
//! - [`roster`] - Participant sources (JSON, sample)
//! - [`sample`] - Seeded random rosters
//! - [`report`] - Result sinks and the `run` pipeline
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod finder;
pub mod participant;
pub mod report;
pub mod roster;
pub mod sample;
pub mod schedule;
pub mod time_range;
pub mod weekday;
pub mod weekly;

pub use config::FinderConfig;
pub use error::OverlapError;
pub use finder::{find_groups, GroupCandidate, GroupFinder, GroupSchedule, SearchMode};
pub use participant::Participant;
pub use report::{run, JsonSink, ResultSink, TextSink};
pub use roster::{parse_roster, JsonRoster, ParticipantSource, SampleRoster};
pub use schedule::DaySchedule;
pub use time_range::TimeRange;
pub use weekday::Weekday;
pub use weekly::WeeklyAvailability;
