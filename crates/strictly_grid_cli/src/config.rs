//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_grid::{Labels, Variant, VariantKind};
use tracing::{debug, info, instrument};

/// Configuration for a play session.
///
/// ```toml
/// variant = "connect-four"
/// ascending = false
///
/// [labels]
/// first = "Yellow"
/// second = "Green"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Which built-in variant to play.
    #[serde(default)]
    variant: VariantKind,

    /// Initial move-list order.
    #[serde(default = "default_ascending")]
    ascending: bool,

    /// Optional player label overrides.
    #[serde(default)]
    labels: Option<Labels>,
}

fn default_ascending() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(VariantKind::default())
    }
}

impl PlayConfig {
    /// Creates a configuration with default order and labels.
    #[instrument]
    pub fn new(variant: VariantKind) -> Self {
        Self {
            variant,
            ascending: default_ascending(),
            labels: None,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(variant = %config.variant, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, variant: Option<VariantKind>, descending: bool) -> Self {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if descending {
            self.ascending = false;
        }
        self
    }

    /// Builds the engine variant, applying any label overrides.
    pub fn to_variant(&self) -> Variant {
        let variant = self.variant.variant();
        match &self.labels {
            Some(labels) => variant.with_labels(labels.clone()),
            None => variant,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
