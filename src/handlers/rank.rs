use std::cmp::Ordering;

use chrono::{DateTime, Local};

use crate::models::location::LocationRecord;

/// Earliest slot first. Records without a slot go last and keep their
/// scraped order.
pub fn rank(mut records: Vec<LocationRecord>) -> Vec<LocationRecord> {
    // sort_by is stable, which is what keeps the no-slot tail in order
    records.sort_by(|a, b| compare_first_available(a.first_available(), b.first_available()));
    records
}

pub fn compare_first_available(
    a: Option<&DateTime<Local>>,
    b: Option<&DateTime<Local>>,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}
