//! Error types for workout compilation
//!
//! Every failure is terminal for the compilation that raised it. Lexing and
//! parsing failures carry the byte offset and line/column of the offending
//! input; semantic failures raised while reducing the parse tree carry the
//! offset of the node that was rejected, when one exists.

use thiserror::Error;

use crate::zwog::ast::position::{Position, SourceLocation};

pub(crate) const NON_POSITIVE_DURATION: &str = "Duration values need to be strictly positive";
pub(crate) const NON_POSITIVE_TOTAL_DURATION: &str =
    "Interval duration values need to be strictly positive";
pub(crate) const DURATION_OUT_OF_RANGE: &str = "Duration values need to fit in 64-bit seconds";

/// An error that aborted a compilation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// The input does not match the grammar
    #[error("syntax error at {position}: unexpected {found}{}", describe_expected(.expected))]
    Syntax {
        offset: usize,
        position: Position,
        found: String,
        expected: Vec<String>,
    },

    /// The input is a valid prefix but ended before the grammar was satisfied
    #[error("unexpected end of input at {position}{}", describe_expected(.expected))]
    UnexpectedEndOfInput {
        offset: usize,
        position: Position,
        expected: Vec<String>,
    },

    #[error("{message}")]
    InvalidDuration {
        offset: Option<usize>,
        message: &'static str,
    },

    #[error("Power values need to be positive: {value}")]
    InvalidPower { offset: Option<usize>, value: f64 },

    #[error("Repeat multipliers need to be strictly positive: {value}")]
    InvalidRepeatCount {
        offset: Option<usize>,
        value: String,
    },

    #[error("Unexpected unit of time: {unit}")]
    UnknownTimeUnit { offset: Option<usize>, unit: String },

    /// A serialized workout could not be read back
    #[error("invalid workout representation: {message}")]
    InvalidRepresentation { message: String },
}

/// Field-less discriminant of [`CompileError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    UnexpectedEndOfInput,
    InvalidDuration,
    InvalidPower,
    InvalidRepeatCount,
    UnknownTimeUnit,
    InvalidRepresentation,
}

impl CompileError {
    pub(crate) fn unexpected_character(source: &str, offset: usize, found: Option<char>) -> Self {
        let position = SourceLocation::new(source).byte_to_position(offset);
        match found {
            Some(ch) => CompileError::Syntax {
                offset,
                position,
                found: format!("{:?}", ch),
                expected: Vec::new(),
            },
            None => CompileError::UnexpectedEndOfInput {
                offset,
                position,
                expected: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Syntax { .. } => ErrorKind::Syntax,
            CompileError::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            CompileError::InvalidDuration { .. } => ErrorKind::InvalidDuration,
            CompileError::InvalidPower { .. } => ErrorKind::InvalidPower,
            CompileError::InvalidRepeatCount { .. } => ErrorKind::InvalidRepeatCount,
            CompileError::UnknownTimeUnit { .. } => ErrorKind::UnknownTimeUnit,
            CompileError::InvalidRepresentation { .. } => ErrorKind::InvalidRepresentation,
        }
    }

    /// Byte offset into the source where the error was detected, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            CompileError::Syntax { offset, .. }
            | CompileError::UnexpectedEndOfInput { offset, .. } => Some(*offset),
            CompileError::InvalidDuration { offset, .. }
            | CompileError::InvalidPower { offset, .. }
            | CompileError::InvalidRepeatCount { offset, .. }
            | CompileError::UnknownTimeUnit { offset, .. } => *offset,
            CompileError::InvalidRepresentation { .. } => None,
        }
    }

    /// Line/column of the error, for lexing and parsing failures
    pub fn position(&self) -> Option<Position> {
        match self {
            CompileError::Syntax { position, .. }
            | CompileError::UnexpectedEndOfInput { position, .. } => Some(*position),
            _ => None,
        }
    }
}

fn describe_expected(expected: &[String]) -> String {
    match expected {
        [] => String::new(),
        [only] => format!(", expected {}", only),
        many => format!(", expected one of {}", many.join(", ")),
    }
}
