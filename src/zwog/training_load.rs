//! Training load
//!
//! A simplified training stress score: hours at the lower power bound plus
//! half of the ramp's span, in percent-of-FTP hours.

use crate::zwog::ast::{Block, Interval, Workout};
use crate::zwog::building::time_unit::SECONDS_IN_HOUR;

pub fn interval_load(interval: &Interval) -> f64 {
    let hours = interval.duration() as f64 / SECONDS_IN_HOUR as f64;
    let (low, high) = interval.power().bounds();
    hours * low + hours * (high - low) / 2.0
}

/// Load of one block. Single-interval blocks count their interval once,
/// whatever the repeat count; other blocks scale with it.
pub fn block_load(block: &Block) -> f64 {
    match block.intervals() {
        [only] => interval_load(only),
        intervals => intervals
            .iter()
            .map(|interval| block.repeats() as f64 * interval_load(interval))
            .fold(0.0, |total, load| total + load),
    }
}

pub fn compute_training_load(workout: &Workout) -> f64 {
    workout
        .blocks()
        .iter()
        .map(block_load)
        .fold(0.0, |total, load| total + load)
}
