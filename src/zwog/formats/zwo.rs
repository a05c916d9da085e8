//! ZWO workout file rendering
//!
//! A ZWO file is a `workout_file` element holding the metadata children
//! followed by a `workout` element with one child per segment:
//!
//! ```text
//! <workout_file>
//!     <author>..</author><name>..</name><description>..</description>
//!     <sportType>bike</sportType><category>..</category>
//!     <workout>
//!         <Warmup Duration="60" PowerLow="0.4" PowerHigh="0.8" />
//!         <IntervalsT Repeat="2" OnDuration="60" OnPower="0.95" ... />
//!         <Cooldown Duration="600" PowerLow="0.7" PowerHigh="0.5" />
//!     </workout>
//! </workout_file>
//! ```
//!
//! Powers are written as fractions of FTP, durations in whole seconds.

use crate::zwog::ast::{Block, Interval, Power, Workout};
use crate::zwog::classify::{classify, BlockKind};
use crate::zwog::formats::pretty::render_pretty;
use crate::zwog::formats::xml::{XmlDocument, XmlElement};
use crate::zwog::metadata::Metadata;

pub const DESCRIPTION_PREAMBLE: &str = "This workout was generated using ZWOG.";
pub const SPORT_TYPE: &str = "bike";

/// Build the ZWO document for `workout`.
pub fn render_xml(workout: &Workout, metadata: &Metadata) -> XmlDocument {
    let mut root = XmlElement::new("workout_file");
    let description = format!("{}\n\n{}", DESCRIPTION_PREAMBLE, render_pretty(workout));

    let fields = [
        ("author", Some(metadata.author.as_str())),
        ("name", Some(metadata.name.as_str())),
        ("description", Some(description.as_str())),
        ("sportType", Some(SPORT_TYPE)),
        ("category", metadata.category.as_deref()),
        ("subcategory", metadata.subcategory.as_deref()),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            root.push(XmlElement::new(name).with_text(value));
        }
    }

    let mut segments = XmlElement::new("workout");
    let last = workout.len().saturating_sub(1);
    for (index, block) in workout.blocks().iter().enumerate() {
        for segment in block_segments(block, index == 0, index == last) {
            segments.push(segment);
        }
    }
    tracing::debug!(
        blocks = workout.len(),
        segments = segments.children().len(),
        "rendered zwo document"
    );
    root.push(segments);
    XmlDocument::new(root)
}

/// Segments for one block. A ramp opening the workout is a warmup, one
/// closing it a cooldown; both are written once regardless of repeats.
fn block_segments(block: &Block, is_first: bool, is_last: bool) -> Vec<XmlElement> {
    let repeats = block.repeats() as usize;
    match (classify(block), block.intervals()) {
        (BlockKind::Ramp, [only]) if is_first || is_last => {
            let name = if is_first { "Warmup" } else { "Cooldown" };
            vec![interval_element(only).renamed(name)]
        }
        (BlockKind::IntervalPair, [on, off]) => vec![intervals_t(on, off, block.repeats())],
        (_, intervals) => intervals
            .iter()
            .map(interval_element)
            .cycle()
            .take(intervals.len() * repeats)
            .collect(),
    }
}

fn interval_element(interval: &Interval) -> XmlElement {
    let duration = interval.duration().to_string();
    match interval.power() {
        Power::Steady(value) => XmlElement::new("SteadyState")
            .with_attr("Duration", duration)
            .with_attr("Power", ftp_fraction(value)),
        Power::Ramp { start, end } => XmlElement::new("Ramp")
            .with_attr("Duration", duration)
            .with_attr("PowerLow", ftp_fraction(start))
            .with_attr("PowerHigh", ftp_fraction(end)),
    }
}

fn intervals_t(on: &Interval, off: &Interval, repeats: u32) -> XmlElement {
    XmlElement::new("IntervalsT")
        .with_attr("Repeat", repeats.to_string())
        .with_attr("OnDuration", on.duration().to_string())
        .with_attr("OnPower", ftp_fraction(on.power().bounds().0))
        .with_attr("OffDuration", off.duration().to_string())
        .with_attr("OffPower", ftp_fraction(off.power().bounds().0))
}

/// Percent of FTP as a fraction, always with a decimal point (100 -> `1.0`)
pub fn ftp_fraction(percent: f64) -> String {
    format_fraction(percent / 100.0)
}

/// Shortest round-trip decimal; exponents are signed and at least two digits
/// wide (`1e-05`, `2e+16`)
fn format_fraction(value: f64) -> String {
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => shortest,
        },
        None => shortest,
    }
}
