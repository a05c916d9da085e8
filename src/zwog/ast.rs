//! Workout domain model
//!
//! A [`Workout`] is an ordered sequence of [`Block`]s, each holding one or more
//! [`Interval`]s and a repeat multiplier. Values are immutable once built: the
//! constructors check the invariants (positive durations, non-negative powers,
//! at least one interval, at least one repeat) and the fields are only exposed
//! through accessors.
//!
//! The reducer in [`building`](crate::zwog::building) is the usual producer of
//! these values. It validates every leaf with source offsets attached before
//! reaching the constructors here, so the constructor checks only fire for
//! values built by hand or read back from a serialized workout.

pub mod elements;
pub mod position;

pub use elements::block::Block;
pub use elements::interval::{Interval, Power};
pub use elements::workout::Workout;
pub use position::{Position, SourceLocation};
