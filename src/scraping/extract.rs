use tracing::warn;

use crate::error::ExtractError;
use crate::models::location::LocationRecord;
use crate::scraping::constants::{AVAILABILITY_COLUMN, DISTANCE_COLUMN, LOCATION_COLUMN};

/// Turns the location table's rows (header first) into records.
pub fn extract_records(rows: &[Vec<String>]) -> Result<Vec<LocationRecord>, ExtractError> {
    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(index, cells)| {
            let cell = |column: usize| {
                cells
                    .get(column)
                    .ok_or(ExtractError::MissingColumn { row: index, column })
            };

            let location = cell(LOCATION_COLUMN)?.trim().to_string();
            let distance_text = cell(DISTANCE_COLUMN)?;
            let raw_availability = cell(AVAILABILITY_COLUMN)?.clone();

            let distance_km = parse_distance(distance_text);
            if distance_km.is_none() {
                warn!("location {} has no numeric distance: {:?}", location, distance_text);
            }

            Ok(LocationRecord::new(location, distance_km, raw_availability))
        })
        .collect()
}

/// Leading whole kilometres of a distance cell, e.g. `"12.4 km"` -> 12.
pub fn parse_distance(text: &str) -> Option<u32> {
    let text = text.trim();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}
