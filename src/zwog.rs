//! Workout DSL compiler
//!
//! Compiles a compact text description of an indoor cycling workout into a
//! validated [`Workout`](ast::Workout) and renders it as pretty text, a ZWO
//! workout file, a training load estimate or JSON.

pub mod ast;
pub mod building;
pub mod classify;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod metadata;
pub mod parsing;
pub mod pipeline;
pub mod training_load;

#[cfg(test)]
pub mod testing;
