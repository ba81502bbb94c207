use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::AvailabilityError;

/// Outcome of reading a location's "first available" cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Availability {
    Slot { at: DateTime<Local> },
    NoSlot,
    /// The cell text did not look like a date and time. Ranks like `NoSlot`.
    Unreadable {
        #[serde(serialize_with = "serialize_reason")]
        reason: AvailabilityError,
    },
}

impl Availability {
    pub fn slot(&self) -> Option<&DateTime<Local>> {
        match self {
            Availability::Slot { at } => Some(at),
            Availability::NoSlot | Availability::Unreadable { .. } => None,
        }
    }
}

fn serialize_reason<S: serde::Serializer>(
    reason: &AvailabilityError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub location: String,
    pub distance_km: Option<u32>,
    pub raw_availability: String,
    pub availability: Availability,
}

impl LocationRecord {
    pub fn new(location: String, distance_km: Option<u32>, raw_availability: String) -> Self {
        let availability = super::availability::parse_first_available(&raw_availability);
        LocationRecord {
            location,
            distance_km,
            raw_availability,
            availability,
        }
    }

    pub fn first_available(&self) -> Option<&DateTime<Local>> {
        self.availability.slot()
    }
}
