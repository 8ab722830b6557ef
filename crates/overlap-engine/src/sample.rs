//! Seeded random rosters for demos, tests and benchmarks.
//!
//! Each generated participant is free on 1–7 distinct days. Each of those days
//! gets 1–5 ranges on the hour, starting between 09:00 and 22:00 and ending no
//! later than 23:00. The same seed always yields the same roster.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::participant::Participant;
use crate::time_range::TimeRange;
use crate::weekday::Weekday;
use crate::weekly::WeeklyAvailability;

const PLACEHOLDER_NAMES: [&str; 50] = [
    "Smith", "Johnson", "Brown", "Taylor", "Miller", "Wilson", "Moore", "Davis", "Anderson",
    "Jones", "Garcia", "Martinez", "Rodriguez", "Hernandez", "Lopez", "Gonzalez", "Perez",
    "Sanchez", "Torres", "Ramirez", "Flores", "Washington", "Lee", "Kim", "Chen", "Patel",
    "Williams", "Jones", "Jackson", "Harris", "White", "Clark", "Lewis", "Hall", "Young",
    "Turner", "Walker", "Thomas", "Wright", "Rodriguez", "Scott", "Evans", "Adams", "Baker",
    "Nelson", "Green", "Hill", "King", "Mitchell", "Carter",
];

const FIRST_START_HOUR: u32 = 9;
const LAST_START_HOUR: u32 = 22;
const LAST_END_HOUR: u32 = 23;
const MAX_RANGES_PER_DAY: usize = 5;

/// Generate `count` participants from `seed`.
///
/// Names cycle through a fixed placeholder list; once it is exhausted a round
/// number is appended (`Smith 2`, `smith2@example.edu`).
pub fn generate_participants(count: usize, seed: u64) -> Result<Vec<Participant>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let (name, contact) = placeholder_identity(i);
            Ok(Participant::new(name, contact, random_week(&mut rng)?))
        })
        .collect()
}

fn placeholder_identity(i: usize) -> (String, String) {
    let base = PLACEHOLDER_NAMES[i % PLACEHOLDER_NAMES.len()];
    let round = i / PLACEHOLDER_NAMES.len();
    if round == 0 {
        (base.to_string(), format!("{}@example.edu", base.to_lowercase()))
    } else {
        (
            format!("{} {}", base, round + 1),
            format!("{}{}@example.edu", base.to_lowercase(), round + 1),
        )
    }
}

fn random_week<R: Rng>(rng: &mut R) -> Result<WeeklyAvailability> {
    let mut days = Weekday::ALL.to_vec();
    days.shuffle(rng);
    days.truncate(rng.gen_range(1..=days.len()));

    let mut ranges = Vec::new();
    for day in days {
        for _ in 0..rng.gen_range(1..=MAX_RANGES_PER_DAY) {
            let start = rng.gen_range(FIRST_START_HOUR..=LAST_START_HOUR);
            let end = rng.gen_range(start + 1..=LAST_END_HOUR);
            ranges.push((day, TimeRange::from_hm(start, 0, end, 0)?));
        }
    }
    Ok(WeeklyAvailability::from_ranges(ranges))
}
