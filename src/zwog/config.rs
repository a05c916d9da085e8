//! Configuration loading
//!
//! Metadata defaults come from [`Metadata::default`] and form the lowest
//! layer. Callers stack TOML files, `ZWOG_*` environment variables and
//! explicit overrides on top with [`Loader`]; later layers win.
//!
//! ```text
//! [metadata]
//! author = "Jane Roe"
//! name = "Sweet spot"
//! category = "Threshold"
//! ```

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::zwog::metadata::Metadata;

/// Prefix of the environment variables read by [`Loader::with_env`]
pub const ENV_PREFIX: &str = "ZWOG";

#[derive(Debug, Clone, Deserialize)]
pub struct ZwogConfig {
    pub metadata: Metadata,
}

/// Layered metadata configuration
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        tracing::trace!(path = %path.display(), required, "adding configuration file");
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `ZWOG_*` environment variables, `__` separating nested keys
    /// (`ZWOG_METADATA__AUTHOR` sets `metadata.author`).
    pub fn with_env(self) -> Self {
        self.with_env_prefix(ENV_PREFIX)
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        let source = Environment::with_prefix(prefix)
            .prefix_separator("_")
            .separator("__");
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one key (`metadata.author`, `metadata.category`, ...) above every other layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ZwogConfig, ConfigError> {
        let defaults = Metadata::default();
        let config: ZwogConfig = self
            .builder
            .set_default("metadata.author", defaults.author)?
            .set_default("metadata.name", defaults.name)?
            .build()?
            .try_deserialize()?;
        tracing::debug!(
            author = %config.metadata.author,
            name = %config.metadata.name,
            "loaded configuration"
        );
        Ok(config)
    }

    /// [`build`](Self::build), keeping only the metadata
    pub fn metadata(self) -> Result<Metadata, ConfigError> {
        Ok(self.build()?.metadata)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ZwogConfig, ConfigError> {
    Loader::new().build()
}
