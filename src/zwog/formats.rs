//! Output formats
//!
//! Read-only projections of a [`Workout`](crate::zwog::ast::Workout):
//!
//! - [`pretty`]: one human-readable line per block
//! - [`zwo`]: the ZWO workout file, built on the small element tree in [`xml`]
//! - [`json`]: the canonical structured representation, with a validating reader
//!
//! None of them mutate the workout, and each can be used on its own.

pub mod json;
pub mod pretty;
pub mod xml;
pub mod zwo;

pub use json::{from_json, to_json, to_json_pretty};
pub use pretty::render_pretty;
pub use xml::{XmlDocument, XmlElement};
pub use zwo::render_xml;
