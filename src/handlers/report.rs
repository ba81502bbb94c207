use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::models::location::{Availability, LocationRecord};
use crate::scraping::constants::NO_SLOT_TEXT;

const SEPARATOR: &str = "-------------------";

/// e.g. `Wednesday, May 21, 2025 at 02:30 PM`
pub fn format_slot(at: &DateTime<Local>) -> String {
    at.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

pub fn render_report(records: &[LocationRecord]) -> String {
    let mut out = String::new();
    out.push_str("Available Locations:\n");
    out.push_str("===================\n");

    if records.is_empty() {
        out.push_str("No locations found.\n");
        return out;
    }

    for (index, record) in records.iter().enumerate() {
        let distance = match record.distance_km {
            Some(km) => format!("{km} km"),
            None => "unknown".to_string(),
        };
        let first_available = match &record.availability {
            Availability::Slot { at } => format_slot(at),
            Availability::NoSlot | Availability::Unreadable { .. } => NO_SLOT_TEXT.to_string(),
        };

        // writing to a String cannot fail
        let _ = writeln!(out, "{}. {}", index + 1, record.location);
        let _ = writeln!(out, "   Distance: {distance}");
        let _ = writeln!(out, "   First Available: {first_available}");
        if let Availability::Unreadable { .. } = record.availability {
            let _ = writeln!(
                out,
                "   (could not read availability text: {:?})",
                record.raw_availability
            );
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    out
}
