//! Compilation pipeline
//!
//!     source -> tokens -> parse tree -> Workout -> pretty / ZWO / load / JSON
//!
//! [`compile`] runs every stage up to the domain model and wraps the result
//! with its metadata. Renderings are computed on demand from the stored
//! workout.

use std::fmt;

use crate::zwog::ast::Workout;
use crate::zwog::building::build_workout;
use crate::zwog::error::CompileError;
use crate::zwog::formats::{json, render_pretty, render_xml, XmlDocument};
use crate::zwog::metadata::Metadata;
use crate::zwog::parsing::parse;
use crate::zwog::training_load::compute_training_load;

/// Parse and reduce source text into a workout
pub fn parse_workout(source: &str) -> Result<Workout, CompileError> {
    let tree = parse(source)?;
    build_workout(&tree)
}

pub fn compile(source: &str, metadata: Metadata) -> Result<CompiledWorkout, CompileError> {
    let workout = parse_workout(source).map_err(|error| {
        tracing::debug!(kind = ?error.kind(), %error, "compilation failed");
        error
    })?;
    tracing::debug!(
        name = %metadata.name,
        blocks = workout.len(),
        seconds = workout.total_duration(),
        "compiled workout"
    );
    Ok(CompiledWorkout { workout, metadata })
}

/// [`compile`] with [`Metadata::default`]
pub fn compile_with_defaults(source: &str) -> Result<CompiledWorkout, CompileError> {
    compile(source, Metadata::default())
}

/// A validated workout together with the metadata used for its ZWO file
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledWorkout {
    workout: Workout,
    metadata: Metadata,
}

impl CompiledWorkout {
    pub fn new(workout: Workout, metadata: Metadata) -> Self {
        Self { workout, metadata }
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn pretty(&self) -> String {
        render_pretty(&self.workout)
    }

    pub fn zwo(&self) -> XmlDocument {
        render_xml(&self.workout, &self.metadata)
    }

    /// Serialized ZWO file, newline-terminated
    pub fn zwo_string(&self) -> String {
        self.zwo().serialize()
    }

    pub fn training_load(&self) -> f64 {
        compute_training_load(&self.workout)
    }

    pub fn to_json(&self) -> Result<String, CompileError> {
        json::to_json(&self.workout)
    }

    pub fn into_workout(self) -> Workout {
        self.workout
    }
}

impl fmt::Display for CompiledWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
