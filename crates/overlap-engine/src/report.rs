//! Result sinks and the source → finder → sink pipeline.

use std::io::Write;

use tracing::debug;

use crate::error::{OverlapError, Result};
use crate::finder::{GroupFinder, GroupSchedule, SearchMode};
use crate::roster::ParticipantSource;

/// Receives the outcome of one search.
pub trait ResultSink {
    fn write(&mut self, schedule: &GroupSchedule<'_>) -> Result<()>;
}

/// Human-readable report, one block per day with a group.
///
/// ```text
/// Monday (30 min together)
///   Members: Smith (smith@example.edu), Jones (jones@example.edu)
///   Free: 10:00 AM to 10:30 AM
/// ```
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn write(&mut self, schedule: &GroupSchedule<'_>) -> Result<()> {
        if schedule.is_empty() {
            writeln!(self.out, "No qualifying groups.")?;
            return Ok(());
        }

        for (i, candidate) in schedule.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            writeln!(
                self.out,
                "{} ({} min together)",
                candidate.day,
                candidate.common_minutes()
            )?;
            let members: Vec<String> = candidate.members.iter().map(|p| p.to_string()).collect();
            writeln!(self.out, "  Members: {}", members.join(", "))?;
            let free: Vec<String> = candidate
                .common_availability
                .ranges()
                .iter()
                .map(|r| r.to_string())
                .collect();
            writeln!(self.out, "  Free: {}", free.join(", "))?;
        }
        Ok(())
    }
}

/// Pretty JSON keyed by weekday.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn write(&mut self, schedule: &GroupSchedule<'_>) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, schedule).map_err(json_error)?;
        writeln!(self.out)?;
        Ok(())
    }
}

fn json_error(e: serde_json::Error) -> OverlapError {
    if e.is_io() {
        OverlapError::Io(e.into())
    } else {
        OverlapError::Report(e.to_string())
    }
}

/// Load participants, search, and hand the result to `sink`.
///
/// Returns the number of days with a group.
pub fn run(
    source: &mut dyn ParticipantSource,
    finder: &GroupFinder,
    mode: SearchMode,
    sink: &mut dyn ResultSink,
) -> Result<usize> {
    let participants = source.load()?;
    debug!(count = participants.len(), "participants loaded");

    let schedule = finder.search(&participants, mode);
    sink.write(&schedule)?;
    Ok(schedule.len())
}
