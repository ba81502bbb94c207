use chrono::{DateTime, Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::AvailabilityError;
use crate::models::location::Availability;
use crate::scraping::constants::NO_SLOT_TEXT;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").expect("date pattern is valid"));

/// Reads a "first available" cell such as `"21/05/2025\n10:30 AM"`.
///
/// Text that cannot be read is logged and kept as [`Availability::Unreadable`]
/// so a single odd cell never stops the report.
pub fn parse_first_available(text: &str) -> Availability {
    match parse_timestamp(text) {
        Ok(Some(at)) => Availability::Slot { at },
        Ok(None) => Availability::NoSlot,
        Err(reason) => {
            warn!("unreadable availability text {:?}: {}", text, reason);
            Availability::Unreadable { reason }
        }
    }
}

/// Strict form of [`parse_first_available`]: `Ok(None)` only for the
/// "no slot" sentinel, an error for anything that is not `DD/MM/YYYY` on one
/// line followed by `H:MM AM|PM` on the next.
pub fn parse_timestamp(text: &str) -> Result<Option<DateTime<Local>>, AvailabilityError> {
    let trimmed = text.trim();
    if trimmed == NO_SLOT_TEXT {
        return Ok(None);
    }

    // blank lines and \r between the two parts are tolerated
    let mut lines = trimmed.lines().map(str::trim).filter(|line| !line.is_empty());
    let (date_part, time_part) = match (lines.next(), lines.next()) {
        (Some(date), Some(time)) => (date, time),
        _ => return Err(AvailabilityError::MissingSeparator(trimmed.to_string())),
    };

    let caps = DATE_PATTERN
        .captures(date_part)
        .ok_or_else(|| AvailabilityError::BadDate(date_part.to_string()))?;
    // the pattern only admits ascii digits, so these cannot fail
    let day: u32 = caps[1].parse().unwrap_or_default();
    let month: u32 = caps[2].parse().unwrap_or_default();
    let year: i32 = caps[3].parse().unwrap_or_default();

    let (hour, minute) = parse_clock(time_part)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            AvailabilityError::OutOfRange(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(Some)
        .ok_or_else(|| AvailabilityError::NonexistentLocalTime(naive.to_string()))
}

/// `"2:30 PM"` -> `(14, 30)`.
fn parse_clock(time_part: &str) -> Result<(u32, u32), AvailabilityError> {
    let bad_time = || AvailabilityError::BadTime(time_part.to_string());

    let (time, meridiem) = time_part.split_once(' ').ok_or_else(bad_time)?;
    let (hour, minute) = time.split_once(':').ok_or_else(bad_time)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
        return Err(bad_time());
    }
    let hour: u32 = hour.parse().map_err(|_| bad_time())?;
    let minute: u32 = minute.parse().map_err(|_| bad_time())?;

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(AvailabilityError::OutOfRange(time_part.to_string()));
    }

    let hour = match meridiem {
        "AM" if hour == 12 => 0,
        "AM" => hour,
        "PM" if hour == 12 => 12,
        "PM" => hour + 12,
        other => return Err(AvailabilityError::BadMeridiem(other.to_string())),
    };

    Ok((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use test_case::test_case;

    fn parts(at: &DateTime<Local>) -> (i32, u32, u32, u32, u32, u32) {
        (
            at.year(),
            at.month(),
            at.day(),
            at.hour(),
            at.minute(),
            at.second(),
        )
    }

    #[test_case("21/05/2025\n2:30 PM", (2025, 5, 21, 14, 30, 0) ; "afternoon")]
    #[test_case("21/05/2025\n10:30 AM", (2025, 5, 21, 10, 30, 0) ; "morning")]
    #[test_case("21/05/2025\n12:00 PM", (2025, 5, 21, 12, 0, 0) ; "noon stays twelve")]
    #[test_case("21/05/2025\n12:00 AM", (2025, 5, 21, 0, 0, 0) ; "midnight becomes zero")]
    #[test_case("01/12/2025\n9:05 AM", (2025, 12, 1, 9, 5, 0) ; "single digit hour")]
    #[test_case("01/12/2025\n09:05 AM", (2025, 12, 1, 9, 5, 0) ; "padded hour")]
    #[test_case("  22/05/2025\n09:00 AM  ", (2025, 5, 22, 9, 0, 0) ; "outer whitespace")]
    #[test_case("22/05/2025\r\n\n  05:00 PM", (2025, 5, 22, 17, 0, 0) ; "blank line and crlf")]
    #[test_case("Thu 22/05/2025\n11:45 PM", (2025, 5, 22, 23, 45, 0) ; "date inside longer line")]
    fn parses_valid_slots(input: &str, expected: (i32, u32, u32, u32, u32, u32)) {
        let at = parse_timestamp(input).unwrap().unwrap();
        assert_eq!(parts(&at), expected);
    }

    #[test]
    fn sentinel_is_no_slot() {
        assert_eq!(parse_timestamp("No available slot").unwrap(), None);
        assert_eq!(parse_timestamp("  No available slot\n").unwrap(), None);
        assert_eq!(parse_first_available("No available slot"), Availability::NoSlot);
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        assert!(parse_timestamp("no available slot").is_err());
    }

    #[test_case("21/05/2025 10:30 AM" ; "same line")]
    #[test_case("" ; "empty")]
    #[test_case("21/05/2025" ; "date only")]
    fn missing_separator(input: &str) {
        assert!(matches!(
            parse_timestamp(input),
            Err(AvailabilityError::MissingSeparator(_))
        ));
    }

    #[test_case("2025-05-21\n10:30 AM" ; "iso date")]
    #[test_case("1/5/2025\n10:30 AM" ; "unpadded date")]
    fn bad_date(input: &str) {
        assert!(matches!(parse_timestamp(input), Err(AvailabilityError::BadDate(_))));
    }

    #[test_case("21/05/2025\n10:30" ; "no meridiem")]
    #[test_case("21/05/2025\n1030 AM" ; "no colon")]
    #[test_case("21/05/2025\n10:3 AM" ; "short minutes")]
    #[test_case("21/05/2025\n100:30 AM" ; "long hour")]
    fn bad_time(input: &str) {
        assert!(matches!(parse_timestamp(input), Err(AvailabilityError::BadTime(_))));
    }

    #[test]
    fn bad_meridiem() {
        assert_eq!(
            parse_timestamp("21/05/2025\n10:30 pm"),
            Err(AvailabilityError::BadMeridiem("pm".to_string()))
        );
    }

    #[test_case("21/13/2025\n10:30 AM" ; "month thirteen")]
    #[test_case("32/05/2025\n10:30 AM" ; "day thirty two")]
    #[test_case("29/02/2025\n10:30 AM" ; "not a leap year")]
    #[test_case("21/05/2025\n13:30 PM" ; "hour past twelve")]
    #[test_case("21/05/2025\n0:30 AM" ; "hour zero")]
    #[test_case("21/05/2025\n10:60 AM" ; "minute sixty")]
    fn out_of_range(input: &str) {
        assert!(matches!(
            parse_timestamp(input),
            Err(AvailabilityError::OutOfRange(_))
        ));
    }

    #[test]
    fn leap_day_is_valid() {
        let at = parse_timestamp("29/02/2028\n8:00 AM").unwrap().unwrap();
        assert_eq!((at.month(), at.day()), (2, 29));
    }

    #[test]
    fn lenient_form_marks_garbage_unreadable() {
        match parse_first_available("call for availability") {
            Availability::Unreadable { reason } => {
                assert!(matches!(reason, AvailabilityError::MissingSeparator(_)))
            }
            other => panic!("expected unreadable, got {other:?}"),
        }
    }
}
