//! Lexer
//!
//! This module contains the tokenization logic for the workout language: the
//! token definitions and the span-preserving tokenizer that feeds the parser.
//!
//! Logos tokens carry the byte range of their source text. The parser never looks
//! at the ranges itself, but they travel with every parse tree node so that the
//! reducer can point semantic errors back at the offending source.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::ops::Range;

use crate::zwog::error::CompileError;

/// A token paired with the byte range it was read from
pub type TokenSpan = (Token, Range<usize>);

/// Tokenize a source string, keeping the byte range of every token.
///
/// The first character that cannot start any token aborts tokenization with a
/// syntax error located at that character.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<TokenSpan>, CompileError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let found = source[span.clone()].chars().next();
                return Err(CompileError::unexpected_character(source, span.start, found));
            }
        }
    }

    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "tokenized workout");
    Ok(tokens)
}

/// Convenience function to tokenize a string, dropping the spans
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}
