//! Parser
//!
//! Turns source text into a [`WorkoutNode`] parse tree. Tokenizing is done by
//! the logos lexer in [`lexing`](crate::zwog::lexing); the token stream,
//! spans included, is then fed to the chumsky combinators in [`parser`].
//!
//! Errors
//!
//!     Chumsky reports the furthest point it reached. When that point is past
//!     the last token the input was a valid prefix that stopped too early, and
//!     the failure is reported as [`CompileError::UnexpectedEndOfInput`]. Every
//!     other failure is a [`CompileError::Syntax`] at the offending token.

pub mod parse_tree;
pub mod parser;

pub use parse_tree::{
    BlockNode, DurationSpecNode, IntervalNode, NumberNode, PowerNode, WorkoutNode,
};

use chumsky::prelude::*;
use chumsky::Stream;

use crate::zwog::ast::position::SourceLocation;
use crate::zwog::error::CompileError;
use crate::zwog::lexing::{tokenize_with_spans, Token};
use parser::ParserError;

/// Parse source text into a parse tree
pub fn parse(source: &str) -> Result<WorkoutNode, CompileError> {
    let tokens = tokenize_with_spans(source)?;
    let eoi = source.len()..source.len();

    let tree = parser::workout()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| match errors.into_iter().next() {
            Some(error) => convert_parser_error(source, error),
            None => CompileError::unexpected_character(source, source.len(), None),
        })?;

    tracing::debug!(blocks = tree.blocks.len(), "parsed workout");
    Ok(tree)
}

fn convert_parser_error(source: &str, error: ParserError) -> CompileError {
    let offset = error.span().start;
    let position = SourceLocation::new(source).byte_to_position(offset);

    let mut expected: Vec<String> = error
        .expected()
        .map(|token| match token {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        })
        .collect();
    if let Some(label) = error.label() {
        expected.push(label.to_string());
    }
    expected.sort();
    expected.dedup();

    match error.found() {
        Some(found) => CompileError::Syntax {
            offset,
            position,
            found: describe_found(found),
            expected,
        },
        None => CompileError::UnexpectedEndOfInput {
            offset,
            position,
            expected,
        },
    }
}

fn describe_found(token: &Token) -> String {
    match token {
        Token::Number(_) => format!("number {}", token),
        Token::TimeUnit(_) => format!("time unit {}", token),
        _ => token.to_string(),
    }
}
