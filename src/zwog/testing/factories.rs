//! Domain value factories

use crate::zwog::ast::{Block, Interval, Workout};

pub fn steady(duration: u64, power: f64) -> Interval {
    Interval::steady(duration, power).expect("valid steady-state interval")
}

pub fn ramp(duration: u64, start: f64, end: f64) -> Interval {
    Interval::ramp(duration, start, end).expect("valid ramp interval")
}

/// A block that runs once
pub fn block(intervals: Vec<Interval>) -> Block {
    Block::once(intervals).expect("valid block")
}

pub fn repeated(repeats: u32, intervals: Vec<Interval>) -> Block {
    Block::new(intervals, repeats).expect("valid repeated block")
}

pub fn workout(blocks: Vec<Block>) -> Workout {
    Workout::new(blocks)
}
