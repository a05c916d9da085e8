//! Units of time accepted after a duration value

use std::fmt;
use std::str::FromStr;

pub const SECONDS_IN_MINUTE: u64 = 60;
pub const SECONDS_IN_HOUR: u64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub fn seconds(self) -> u64 {
        match self {
            TimeUnit::Hours => SECONDS_IN_HOUR,
            TimeUnit::Minutes => SECONDS_IN_MINUTE,
            TimeUnit::Seconds => 1,
        }
    }
}

/// Error returned for a unit spelling outside the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeUnit(pub String);

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        match unit {
            "hrs" | "h" => Ok(TimeUnit::Hours),
            "min" | "m" => Ok(TimeUnit::Minutes),
            "sec" | "s" => Ok(TimeUnit::Seconds),
            other => Err(UnknownTimeUnit(other.to_string())),
        }
    }
}

/// Canonical one-letter spelling used when rendering durations
impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self {
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
        };
        f.write_str(suffix)
    }
}
