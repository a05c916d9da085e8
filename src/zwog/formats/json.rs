//! Canonical structured representation
//!
//! ```text
//! {"blocks":[{"intervals":[{"duration":60,"power":{"steady":100.0}}],"repeats":1}]}
//! ```
//!
//! Writing goes straight through the serde derives on the domain model.
//! Reading goes through private mirror types and then the validating
//! constructors, so a decoded workout upholds the same invariants as a
//! compiled one.

use serde::Deserialize;

use crate::zwog::ast::{Block, Interval, Power, Workout};
use crate::zwog::error::CompileError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkoutRepr {
    blocks: Vec<BlockRepr>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockRepr {
    intervals: Vec<IntervalRepr>,
    #[serde(default = "default_repeats")]
    repeats: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IntervalRepr {
    duration: u64,
    power: Power,
}

fn default_repeats() -> u32 {
    1
}

pub fn to_json(workout: &Workout) -> Result<String, CompileError> {
    serde_json::to_string(workout).map_err(representation_error)
}

pub fn to_json_pretty(workout: &Workout) -> Result<String, CompileError> {
    serde_json::to_string_pretty(workout).map_err(representation_error)
}

pub fn from_json(input: &str) -> Result<Workout, CompileError> {
    let repr: WorkoutRepr = serde_json::from_str(input).map_err(representation_error)?;
    let blocks = repr
        .blocks
        .into_iter()
        .map(|block| {
            let intervals = block
                .intervals
                .into_iter()
                .map(|interval| Interval::new(interval.duration, interval.power))
                .collect::<Result<Vec<_>, _>>()?;
            Block::new(intervals, block.repeats)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Workout::new(blocks))
}

fn representation_error(error: serde_json::Error) -> CompileError {
    CompileError::InvalidRepresentation {
        message: error.to_string(),
    }
}
