//! Workout metadata written to the ZWO file header
//!
//! The constants below are the only copy of the built-in defaults; the
//! configuration loader seeds its lowest layer from [`Metadata::default`].

use serde::Deserialize;

use crate::zwog::config::ZwogConfig;

pub const DEFAULT_AUTHOR: &str = "Zwift workout generator (https://github.com/tare/zwog)";
pub const DEFAULT_NAME: &str = "Structured workout";

/// Author, name and optional category/subcategory of a workout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub author: String,
    pub name: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl Metadata {
    pub fn new(author: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            category: None,
            subcategory: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR, DEFAULT_NAME)
    }
}

impl From<&ZwogConfig> for Metadata {
    fn from(config: &ZwogConfig) -> Self {
        config.metadata.clone()
    }
}
