//! Block classification
//!
//! Renderers treat a block differently depending on its shape. The shape is a
//! pure function of the block and is never stored:
//!
//! - one ramp interval: [`BlockKind::Ramp`]
//! - one steady-state interval: [`BlockKind::SteadyState`]
//! - two steady-state intervals: [`BlockKind::IntervalPair`], an on/off pair
//! - anything else: [`BlockKind::Sequence`], repeated as a unit
//!
//! Warmup and cooldown are not kinds. They depend on where a ramp sits in the
//! workout and only the ZWO renderer cares about them.

use crate::zwog::ast::{Block, Interval, Power};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Ramp,
    SteadyState,
    IntervalPair,
    Sequence,
}

pub fn classify(block: &Block) -> BlockKind {
    match block.intervals() {
        [only] if only.power().is_ramp() => BlockKind::Ramp,
        [_] => BlockKind::SteadyState,
        [on, off] if is_steady(on) && is_steady(off) => BlockKind::IntervalPair,
        _ => BlockKind::Sequence,
    }
}

fn is_steady(interval: &Interval) -> bool {
    matches!(interval.power(), Power::Steady(_))
}

pub fn is_ramp(block: &Block) -> bool {
    classify(block) == BlockKind::Ramp
}

pub fn is_steady_state(block: &Block) -> bool {
    classify(block) == BlockKind::SteadyState
}

pub fn is_interval_pair(block: &Block) -> bool {
    classify(block) == BlockKind::IntervalPair
}

impl BlockKind {
    /// Ramp and steady-state blocks hold exactly one interval
    pub fn is_single(self) -> bool {
        matches!(self, BlockKind::Ramp | BlockKind::SteadyState)
    }
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        classify(self)
    }
}
