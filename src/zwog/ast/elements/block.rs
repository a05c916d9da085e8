//! Block element
//!
//! A block is the grammar-level unit of one or more intervals that share a
//! repeat multiplier. How a block is rendered depends on its shape, see
//! [`classify`](crate::zwog::classify).

use serde::Serialize;

use super::interval::Interval;
use crate::zwog::error::CompileError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    intervals: Vec<Interval>,
    repeats: u32,
}

impl Block {
    pub fn new(intervals: Vec<Interval>, repeats: u32) -> Result<Self, CompileError> {
        if intervals.is_empty() {
            return Err(CompileError::InvalidRepresentation {
                message: "a block needs at least one interval".to_string(),
            });
        }
        if repeats == 0 {
            return Err(CompileError::InvalidRepeatCount {
                offset: None,
                value: repeats.to_string(),
            });
        }
        Ok(Self { intervals, repeats })
    }

    /// A block that runs its intervals once
    pub fn once(intervals: Vec<Interval>) -> Result<Self, CompileError> {
        Self::new(intervals, 1)
    }

    /// Intervals in execution order, never empty
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
