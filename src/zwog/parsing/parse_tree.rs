//! Parse tree nodes
//!
//! These structures mirror the grammar one node per rule and keep raw lexemes
//! and byte ranges instead of typed values. They are turned into the domain
//! model by the reducer in [`building`](crate::zwog::building) after parsing
//! completes, which is also where semantic checks happen.

use std::ops::Range;

/// A numeric lexeme with the range it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct NumberNode {
    pub text: String,
    pub span: Range<usize>,
}

/// `duration_spec := NUMBER TIME_UNIT`
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSpecNode {
    pub value: NumberNode,
    pub unit: String,
    pub unit_span: Range<usize>,
    pub span: Range<usize>,
}

/// The power part of an interval: one value after `@`, two after `from .. to`
#[derive(Debug, Clone, PartialEq)]
pub struct PowerNode {
    pub values: Vec<NumberNode>,
    pub span: Range<usize>,
}

/// `interval := duration_spec+ (steady_state | ramp)`
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalNode {
    pub durations: Vec<DurationSpecNode>,
    pub power: PowerNode,
    pub span: Range<usize>,
}

/// `block := [repeats "x"] interval ("," interval)*`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub repeats: Option<NumberNode>,
    pub intervals: Vec<IntervalNode>,
    pub span: Range<usize>,
}

/// `workout := block*`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutNode {
    pub blocks: Vec<BlockNode>,
}
