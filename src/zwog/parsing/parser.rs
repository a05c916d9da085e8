//! Parser implementation for the workout language using chumsky
//!
//! The combinators work on the span-carrying token stream from the lexer and
//! produce the parse tree in [`parse_tree`](super::parse_tree). Each grammar
//! rule has its own function so the structure of the parser reads like the
//! grammar:
//!
//! ```text
//! workout       := block*
//! block         := [repeats "x"] interval ("," interval)*
//! interval      := duration_spec+ (steady_state | ramp)
//! steady_state  := "@" NUMBER "%" "FTP"
//! ramp          := "from" NUMBER "to" NUMBER "%" "FTP"
//! duration_spec := NUMBER TIME_UNIT
//! repeats       := INTEGER
//! ```

use chumsky::prelude::*;
use std::ops::Range;

use super::parse_tree::{
    BlockNode, DurationSpecNode, IntervalNode, NumberNode, PowerNode, WorkoutNode,
};
use crate::zwog::lexing::tokens::is_integer_literal;
use crate::zwog::lexing::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Any numeric literal
fn number() -> impl Parser<Token, NumberNode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token| match token {
        Token::Number(text) => Ok(NumberNode { text, span }),
        other => Err(ParserError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("number")
}

/// A numeric literal made of digits only
fn repeats() -> impl Parser<Token, NumberNode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token| match token {
        Token::Number(text) if is_integer_literal(&text) => Ok(NumberNode { text, span }),
        other => Err(ParserError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("repeat count")
}

fn time_unit() -> impl Parser<Token, (String, Range<usize>), Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token| match token {
        Token::TimeUnit(unit) => Ok((unit, span)),
        other => Err(ParserError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("time unit")
}

fn duration_spec() -> impl Parser<Token, DurationSpecNode, Error = ParserError> + Clone {
    number()
        .then(time_unit())
        .map_with_span(|(value, (unit, unit_span)), span| DurationSpecNode {
            value,
            unit,
            unit_span,
            span,
        })
}

/// `"%" "FTP"`, closing both interval forms
fn percent_ftp() -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Percent).ignore_then(just(Token::Ftp)).ignored()
}

fn steady_state_power() -> impl Parser<Token, PowerNode, Error = ParserError> + Clone {
    just(Token::At)
        .ignore_then(number())
        .then_ignore(percent_ftp())
        .map_with_span(|value, span| PowerNode {
            values: vec![value],
            span,
        })
}

fn ramp_power() -> impl Parser<Token, PowerNode, Error = ParserError> + Clone {
    just(Token::From)
        .ignore_then(number())
        .then_ignore(just(Token::To))
        .then(number())
        .then_ignore(percent_ftp())
        .map_with_span(|(start, end), span| PowerNode {
            values: vec![start, end],
            span,
        })
}

fn interval() -> impl Parser<Token, IntervalNode, Error = ParserError> + Clone {
    duration_spec()
        .repeated()
        .at_least(1)
        .then(steady_state_power().or(ramp_power()))
        .map_with_span(|(durations, power), span| IntervalNode {
            durations,
            power,
            span,
        })
}

fn block() -> impl Parser<Token, BlockNode, Error = ParserError> + Clone {
    // `2 x` and `2 h` both start with a number; or_not rewinds when no `x` follows
    let multiplier = repeats().then_ignore(just(Token::Times)).or_not();

    multiplier
        .then(interval().separated_by(just(Token::Comma)).at_least(1))
        .map_with_span(|(repeats, intervals), span| BlockNode {
            repeats,
            intervals,
            span,
        })
}

/// Parser for a whole workout; the input must be consumed entirely
pub(crate) fn workout() -> impl Parser<Token, WorkoutNode, Error = ParserError> + Clone {
    block()
        .repeated()
        .then_ignore(end())
        .map(|blocks| WorkoutNode { blocks })
}
