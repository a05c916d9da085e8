//! Reduction functions, one per grammar rule
//!
//! Each function takes the parse tree node for its rule and returns either the
//! typed value or the first validation error, tagged with the byte offset of
//! the node that failed.

use super::time_unit::TimeUnit;
use crate::zwog::ast::{Block, Interval, Power, Workout};
use crate::zwog::error::{
    CompileError, DURATION_OUT_OF_RANGE, NON_POSITIVE_DURATION, NON_POSITIVE_TOTAL_DURATION,
};
use crate::zwog::parsing::{
    BlockNode, DurationSpecNode, IntervalNode, NumberNode, PowerNode, WorkoutNode,
};

/// `NUMBER`
pub fn number(node: &NumberNode) -> Result<f64, CompileError> {
    node.text
        .parse::<f64>()
        .map_err(|_| CompileError::InvalidRepresentation {
            message: format!("malformed number '{}' at byte {}", node.text, node.span.start),
        })
}

/// `duration_spec := NUMBER TIME_UNIT`, in whole seconds (fractions truncate)
///
/// Values whose seconds do not fit a `u64` are rejected, never clamped.
pub fn duration_spec(node: &DurationSpecNode) -> Result<u64, CompileError> {
    let value = number(&node.value)?;
    if value.is_nan() || value <= 0.0 {
        return Err(CompileError::InvalidDuration {
            offset: Some(node.span.start),
            message: NON_POSITIVE_DURATION,
        });
    }

    let unit = node
        .unit
        .parse::<TimeUnit>()
        .map_err(|unknown| CompileError::UnknownTimeUnit {
            offset: Some(node.unit_span.start),
            unit: unknown.0,
        })?;

    let seconds = value * unit.seconds() as f64;
    if !seconds.is_finite() || seconds >= u64::MAX as f64 {
        return Err(CompileError::InvalidDuration {
            offset: Some(node.span.start),
            message: DURATION_OUT_OF_RANGE,
        });
    }
    Ok(seconds as u64)
}

/// `duration_spec+`, summed
pub fn durations(nodes: &[DurationSpecNode]) -> Result<u64, CompileError> {
    let mut total: u64 = 0;
    for node in nodes {
        total = total
            .checked_add(duration_spec(node)?)
            .ok_or(CompileError::InvalidDuration {
                offset: Some(node.span.start),
                message: DURATION_OUT_OF_RANGE,
            })?;
    }

    if total == 0 {
        return Err(CompileError::InvalidDuration {
            offset: nodes.first().map(|node| node.span.start),
            message: NON_POSITIVE_TOTAL_DURATION,
        });
    }
    Ok(total)
}

/// `"@" NUMBER` or `"from" NUMBER "to" NUMBER`
pub fn power(node: &PowerNode) -> Result<Power, CompileError> {
    let mut values = Vec::with_capacity(node.values.len());
    for value_node in &node.values {
        let value = number(value_node)?;
        if value < 0.0 {
            return Err(CompileError::InvalidPower {
                offset: Some(value_node.span.start),
                value,
            });
        }
        values.push(value);
    }

    match values.as_slice() {
        [value] => Ok(Power::Steady(*value)),
        [start, end] => Ok(Power::Ramp {
            start: *start,
            end: *end,
        }),
        _ => Err(CompileError::InvalidRepresentation {
            message: format!(
                "power at byte {} needs one or two values, found {}",
                node.span.start,
                values.len()
            ),
        }),
    }
}

/// `repeats := INTEGER`
pub fn repeats(node: &NumberNode) -> Result<u32, CompileError> {
    let invalid = || CompileError::InvalidRepeatCount {
        offset: Some(node.span.start),
        value: node.text.clone(),
    };

    match node.text.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(count) => Ok(count),
    }
}

pub fn interval(node: &IntervalNode) -> Result<Interval, CompileError> {
    let duration = durations(&node.durations)?;
    let power = power(&node.power)?;
    Interval::new(duration, power)
}

pub fn block(node: &BlockNode) -> Result<Block, CompileError> {
    let repeats = match &node.repeats {
        Some(count) => repeats(count)?,
        None => 1,
    };
    let intervals = node
        .intervals
        .iter()
        .map(interval)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(
        repeats,
        intervals = intervals.len(),
        offset = node.span.start,
        "reduced block"
    );
    Block::new(intervals, repeats)
}

pub fn workout(node: &WorkoutNode) -> Result<Workout, CompileError> {
    let blocks = node
        .blocks
        .iter()
        .map(block)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Workout::new(blocks))
}
