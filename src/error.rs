use std::time::Duration;

use thiserror::Error;

use crate::scraping::driver::Locator;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("timed out after {}s waiting for element {locator}", .timeout.as_secs())]
    Timeout { locator: Locator, timeout: Duration },

    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}

/// Reasons a scraped availability cell could not be turned into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("no line break between date and time in {0:?}")]
    MissingSeparator(String),

    #[error("date {0:?} is not in DD/MM/YYYY form")]
    BadDate(String),

    #[error("time {0:?} is not in H:MM AM|PM form")]
    BadTime(String),

    #[error("unknown meridiem {0:?}, expected AM or PM")]
    BadMeridiem(String),

    #[error("{0} is not a valid calendar date and time")]
    OutOfRange(String),

    #[error("{0} does not exist in the local timezone")]
    NonexistentLocalTime(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("row {row} has no column {column}")]
    MissingColumn { row: usize, column: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown state code {0:?}")]
    UnknownState(String),

    #[error("invalid {name} url {value:?}: {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}
