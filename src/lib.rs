//! # zwog
//!
//! Compiler for a small language describing structured cycling workouts.
//!
//! ```text
//! 10m from 40 to 75% FTP
//! 4x 4m @ 110% FTP, 3m @ 50% FTP
//! 10m from 70 to 40% FTP
//! ```
//!
//! A source text goes through a logos lexer and a chumsky parser, is reduced
//! into a [`Workout`] and can then be rendered as normalized text, a ZWO
//! workout file, a training load estimate or JSON. See
//! [`zwog::pipeline`] for the end-to-end entry points.

pub mod zwog;

pub use zwog::ast::{Block, Interval, Position, Power, Workout};
pub use zwog::classify::BlockKind;
pub use zwog::config::{Loader, ZwogConfig};
pub use zwog::error::{CompileError, ErrorKind};
pub use zwog::formats::{from_json, render_pretty, render_xml, to_json, XmlDocument, XmlElement};
pub use zwog::metadata::Metadata;
pub use zwog::pipeline::{compile, compile_with_defaults, parse_workout, CompiledWorkout};
pub use zwog::training_load::compute_training_load;
