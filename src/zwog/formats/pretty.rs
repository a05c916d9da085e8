//! Human-readable rendering
//!
//! ```text
//! 1m @ 50% FTP
//! 3x 5m from 70 to 100% FTP, 5m from 100 to 70% FTP
//! 1m @ 50% FTP
//! ```
//!
//! The output parses back to the same workout, except that a repeat count of
//! one is never written.

use std::fmt;

use crate::zwog::ast::{Block, Interval, Power, Workout};
use crate::zwog::building::time_unit::{TimeUnit, SECONDS_IN_HOUR, SECONDS_IN_MINUTE};

/// Compact `HhMmSs` form with zero components left out (3661 -> `1h1m1s`)
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / SECONDS_IN_HOUR;
    let minutes = (seconds % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE;
    let secs = seconds % SECONDS_IN_MINUTE;

    let mut out = String::new();
    for (value, unit) in [
        (hours, TimeUnit::Hours),
        (minutes, TimeUnit::Minutes),
        (secs, TimeUnit::Seconds),
    ] {
        if value > 0 {
            out.push_str(&format!("{}{}", value, unit));
        }
    }
    out
}

pub fn format_interval(interval: &Interval) -> String {
    let duration = format_duration(interval.duration());
    match interval.power() {
        Power::Steady(value) => format!("{} @ {:.0}% FTP", duration, value),
        Power::Ramp { start, end } => {
            format!("{} from {:.0} to {:.0}% FTP", duration, start, end)
        }
    }
}

pub fn format_block(block: &Block) -> String {
    let intervals: Vec<String> = block.intervals().iter().map(format_interval).collect();
    if block.repeats() > 1 {
        format!("{}x {}", block.repeats(), intervals.join(", "))
    } else {
        intervals.join(", ")
    }
}

/// One line per block, joined by newlines; empty for an empty workout
pub fn render_pretty(workout: &Workout) -> String {
    workout
        .blocks()
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_interval(self))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_block(self))
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_pretty(self))
    }
}
