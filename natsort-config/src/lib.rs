//! Shared configuration loader for the natsort tools.
//!
//! `defaults/natsort.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`NatsortConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use natsort::natural::{Direction, Options};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/natsort.default.toml");

/// Top-level configuration consumed by natsort applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NatsortConfig {
    pub sorting: SortingConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

/// Which comparator to use and how.
#[derive(Debug, Clone, Deserialize)]
pub struct SortingConfig {
    pub sort_type: String,
    pub descending: bool,
    pub dates: bool,
}

impl SortingConfig {
    pub fn direction(&self) -> Direction {
        if self.descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    pub fn options(&self) -> Options {
        Options { dates: self.dates }
    }
}

/// How input lines split into cells.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub delimiter: String,
    pub column: usize,
    pub header: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Builds a [`NatsortConfig`] from the embedded defaults plus any layers
/// added on top. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// TOML file that must exist; `build` fails if it does not.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// TOML file that may be absent, such as a per-user settings file.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Sets one dotted key, e.g. `sorting.descending`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<NatsortConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<NatsortConfig, ConfigError> {
    Loader::new().build()
}
