//! Participant sources.
//!
//! The group finder does not care where participants come from. Anything
//! implementing [`ParticipantSource`] can feed it: a JSON roster on disk, a
//! string handed over by a caller, or the seeded sample generator.
//!
//! Roster JSON is an array of participants:
//!
//! ```json
//! [
//!   {
//!     "name": "Smith",
//!     "contact": "smith@example.edu",
//!     "availability": {
//!       "monday": [{"start": "09:00", "end": "10:30"}]
//!     }
//!   }
//! ]
//! ```

use std::io::Read;
use std::path::PathBuf;

use crate::error::{OverlapError, Result};
use crate::participant::Participant;
use crate::sample;

/// Supplies the participants for one search.
pub trait ParticipantSource {
    fn load(&mut self) -> Result<Vec<Participant>>;
}

/// Parse a roster JSON document.
///
/// Every range goes through [`TimeRange::new`](crate::TimeRange::new), so an
/// entry with `start >= end` fails the whole roster.
pub fn parse_roster(json: &str) -> Result<Vec<Participant>> {
    serde_json::from_str(json).map_err(|e| OverlapError::Roster(e.to_string()))
}

/// Serialize participants as pretty roster JSON.
pub fn to_roster_json(participants: &[Participant]) -> Result<String> {
    serde_json::to_string_pretty(participants).map_err(|e| OverlapError::Roster(e.to_string()))
}

#[derive(Debug, Clone)]
enum RosterInput {
    Text(String),
    File(PathBuf),
}

/// A roster in JSON form, held in memory or read from a file on load.
#[derive(Debug, Clone)]
pub struct JsonRoster {
    input: RosterInput,
}

impl JsonRoster {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            input: RosterInput::Text(json.into()),
        }
    }

    /// The file is read when [`ParticipantSource::load`] is called.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: RosterInput::File(path.into()),
        }
    }

    /// Read the whole of `reader` now.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(Self::from_json(buf))
    }
}

impl ParticipantSource for JsonRoster {
    fn load(&mut self) -> Result<Vec<Participant>> {
        match &self.input {
            RosterInput::Text(json) => parse_roster(json),
            RosterInput::File(path) => parse_roster(&std::fs::read_to_string(path)?),
        }
    }
}

/// Randomly generated participants; see [`crate::sample`].
#[derive(Debug, Clone, Copy)]
pub struct SampleRoster {
    pub count: usize,
    pub seed: u64,
}

impl SampleRoster {
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }
}

impl ParticipantSource for SampleRoster {
    fn load(&mut self) -> Result<Vec<Participant>> {
        sample::generate_participants(self.count, self.seed)
    }
}

/// Participants already in memory.
impl ParticipantSource for Vec<Participant> {
    fn load(&mut self) -> Result<Vec<Participant>> {
        Ok(self.clone())
    }
}
