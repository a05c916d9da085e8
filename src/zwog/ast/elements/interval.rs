//! Interval element
//!
//! One contiguous effort segment: a duration in whole seconds and a target
//! power expressed as a percentage of FTP.

use serde::{Deserialize, Serialize};

use crate::zwog::error::{CompileError, NON_POSITIVE_TOTAL_DURATION};

/// Target effort of an interval, as percentages of FTP
///
/// The shape is decided once, when the interval is built, so renderers match on
/// it instead of inspecting values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Power {
    /// Constant effort
    Steady(f64),
    /// Effort changing linearly from `start` to `end`; order is significant
    Ramp { start: f64, end: f64 },
}

impl Power {
    pub fn is_ramp(&self) -> bool {
        matches!(self, Power::Ramp { .. })
    }

    pub fn is_steady(&self) -> bool {
        matches!(self, Power::Steady(_))
    }

    /// Lowest and highest effort reached, regardless of ramp direction
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Power::Steady(value) => (value, value),
            Power::Ramp { start, end } => (start.min(end), start.max(end)),
        }
    }

    fn values(&self) -> [f64; 2] {
        match *self {
            Power::Steady(value) => [value, value],
            Power::Ramp { start, end } => [start, end],
        }
    }

    /// The first value that breaks the non-negativity invariant, if any
    pub(crate) fn first_negative(&self) -> Option<f64> {
        self.values().into_iter().find(|value| value.is_nan() || *value < 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    duration: u64,
    power: Power,
}

impl Interval {
    pub fn new(duration: u64, power: Power) -> Result<Self, CompileError> {
        if duration == 0 {
            return Err(CompileError::InvalidDuration {
                offset: None,
                message: NON_POSITIVE_TOTAL_DURATION,
            });
        }
        if let Some(value) = power.first_negative() {
            return Err(CompileError::InvalidPower {
                offset: None,
                value,
            });
        }
        Ok(Self { duration, power })
    }

    /// Steady-state interval
    pub fn steady(duration: u64, power: f64) -> Result<Self, CompileError> {
        Self::new(duration, Power::Steady(power))
    }

    /// Ramp interval from `start` to `end`
    pub fn ramp(duration: u64, start: f64, end: f64) -> Result<Self, CompileError> {
        Self::new(duration, Power::Ramp { start, end })
    }

    /// Duration in seconds, always strictly positive
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn power(&self) -> Power {
        self.power
    }
}
