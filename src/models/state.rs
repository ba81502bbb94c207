use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Represents the states and territories offered by the location search dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Australian Capital Territory
    Act,
    /// New South Wales
    Nsw,
    /// Northern Territory
    Nt,
    /// Queensland
    Qld,
    /// South Australia
    Sa,
    /// Tasmania
    Tas,
    /// Victoria
    Vic,
    /// Western Australia
    Wa,
}

/// Implementation for State
impl State {
    pub const ALL: [State; 8] = [
        State::Act,
        State::Nsw,
        State::Nt,
        State::Qld,
        State::Sa,
        State::Tas,
        State::Vic,
        State::Wa,
    ];

    /// Gets the full name of the state
    pub fn title(&self) -> &'static str {
        match self {
            State::Act => "Australian Capital Territory",
            State::Nsw => "New South Wales",
            State::Nt => "Northern Territory",
            State::Qld => "Queensland",
            State::Sa => "South Australia",
            State::Tas => "Tasmania",
            State::Vic => "Victoria",
            State::Wa => "Western Australia",
        }
    }

    /// Gets the option value the state dropdown expects
    pub fn selector(&self) -> &'static str {
        match self {
            State::Act => "ACT",
            State::Nsw => "NSW",
            State::Nt => "NT",
            State::Qld => "QLD",
            State::Sa => "SA",
            State::Tas => "TAS",
            State::Vic => "VIC",
            State::Wa => "WA",
        }
    }
}

impl FromStr for State {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        State::ALL
            .into_iter()
            .find(|state| state.selector().eq_ignore_ascii_case(code))
            .ok_or_else(|| ConfigError::UnknownState(code.to_string()))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
