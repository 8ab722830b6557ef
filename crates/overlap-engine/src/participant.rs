//! A person taking part in scheduling, with their weekly free time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::weekly::WeeklyAvailability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name. Opaque to the algorithms.
    pub name: String,
    /// Contact handle (usually an email address). Opaque to the algorithms.
    pub contact: String,
    #[serde(default)]
    pub availability: WeeklyAvailability,
}

impl Participant {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        availability: WeeklyAvailability,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            availability,
        }
    }

    /// Time this participant and `other` are both free.
    pub fn intersect_with(&self, other: &Participant) -> WeeklyAvailability {
        self.availability.intersect(&other.availability)
    }

    /// A copy with the same identity and a different availability.
    pub fn with_availability(&self, availability: WeeklyAvailability) -> Participant {
        Participant {
            name: self.name.clone(),
            contact: self.contact.clone(),
            availability,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.contact)
    }
}
