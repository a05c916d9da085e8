//! Token definitions for the workout language
//!
//! This module defines all the tokens that can be produced by the workout lexer.
//! The tokens are defined using the logos derive macro. Whitespace is never
//! significant, so logos skips it entirely and every token carries its own
//! byte range through [`tokenize_with_spans`](super::tokenize_with_spans).
use logos::Logos;
use std::fmt;

/// All possible tokens in the workout language
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Unsigned decimal literal, kept as source text until reduction
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),

    /// Unit of time following a number (`sec`, `s`, `min`, `m`, `hrs`, `h`)
    #[token("sec", |lex| lex.slice().to_owned())]
    #[token("s", |lex| lex.slice().to_owned())]
    #[token("min", |lex| lex.slice().to_owned())]
    #[token("m", |lex| lex.slice().to_owned())]
    #[token("hrs", |lex| lex.slice().to_owned())]
    #[token("h", |lex| lex.slice().to_owned())]
    TimeUnit(String),

    // Repeat multiplier marker
    #[token("x")]
    Times,

    // Power markers
    #[token("@")]
    At,
    #[token("from")]
    From,
    #[token("to")]
    To,
    #[token("%")]
    Percent,
    #[token("FTP")]
    Ftp,

    // Interval separator
    #[token(",")]
    Comma,
}

/// Whether a numeric lexeme is a plain run of digits, usable as a repeat count
pub(crate) fn is_integer_literal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) | Token::TimeUnit(text) => write!(f, "'{}'", text),
            Token::Times => write!(f, "'x'"),
            Token::At => write!(f, "'@'"),
            Token::From => write!(f, "'from'"),
            Token::To => write!(f, "'to'"),
            Token::Percent => write!(f, "'%'"),
            Token::Ftp => write!(f, "'FTP'"),
            Token::Comma => write!(f, "','"),
        }
    }
}
