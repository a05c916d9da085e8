//! Tree reduction
//!
//! Converts the parse tree produced by [`parsing`](crate::zwog::parsing) into the
//! [`Workout`] domain model. The reduction runs bottom-up, one function per
//! grammar rule (see [`reducers`]), and validates every leaf before it is
//! composed into a larger value:
//!
//!     duration_spec  -> seconds        (value must be > 0, unit must be known)
//!     duration_spec+ -> seconds        (sum must be > 0)
//!     power          -> Power          (every value must be >= 0)
//!     repeats        -> u32            (must be > 0)
//!     interval       -> Interval
//!     block          -> Block          (repeats default to 1)
//!     workout        -> Workout
//!
//! The first failure aborts the whole reduction; no partial workout escapes.

pub mod reducers;
pub mod time_unit;

pub use time_unit::TimeUnit;

use crate::zwog::ast::Workout;
use crate::zwog::error::CompileError;
use crate::zwog::parsing::WorkoutNode;

/// Reduce a complete parse tree into a workout
pub fn build_workout(tree: &WorkoutNode) -> Result<Workout, CompileError> {
    let workout = reducers::workout(tree)?;
    tracing::debug!(
        blocks = workout.len(),
        seconds = workout.total_duration(),
        "reduced workout"
    );
    Ok(workout)
}
