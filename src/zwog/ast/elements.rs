//! Domain elements, leaves first

pub mod block;
pub mod interval;
pub mod workout;
