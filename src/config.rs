use std::env;

use url::Url;

use crate::error::ConfigError;
use crate::models::state::State;
use crate::scraping::constants::{BASE_URL, DEFAULT_STATE, DEFAULT_SUBURB, WEBDRIVER_URL};

/// Everything the search reads from the environment, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Suburb name or postcode typed into the search box.
    pub suburb: String,
    pub state: State,
    /// Run Chrome with a visible window.
    pub windowed: bool,
    pub webdriver_url: Url,
    pub site_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let suburb = lookup("SUB")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBURB.to_string());

        let state = lookup("STATE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATE.to_string())
            .parse::<State>()?;

        let windowed = lookup("WINDOWS").is_some();

        let webdriver_url = parse_url(
            "WEBDRIVER_URL",
            lookup("WEBDRIVER_URL").unwrap_or_else(|| WEBDRIVER_URL.to_string()),
        )?;
        let site_url = parse_url(
            "BMVS_URL",
            lookup("BMVS_URL").unwrap_or_else(|| BASE_URL.to_string()),
        )?;

        Ok(Config {
            suburb,
            state,
            windowed,
            webdriver_url,
            site_url,
        })
    }

    pub fn headless(&self) -> bool {
        !self.windowed
    }
}

fn parse_url(name: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
        name,
        value,
        source,
    })
}
