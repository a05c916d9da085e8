//! Workout element: the whole session, blocks in execution order

use serde::Serialize;

use super::block::Block;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workout {
    blocks: Vec<Block>,
}

impl Workout {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total time in seconds, with every repeat expanded; saturates at `u64::MAX`
    pub fn total_duration(&self) -> u64 {
        self.blocks.iter().fold(0u64, |total, block| {
            let once = block
                .intervals()
                .iter()
                .fold(0u64, |sum, interval| sum.saturating_add(interval.duration()));
            total.saturating_add(once.saturating_mul(u64::from(block.repeats())))
        })
    }
}

impl<'a> IntoIterator for &'a Workout {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
