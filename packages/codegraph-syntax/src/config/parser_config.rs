//! Parser configuration
//!
//! Controls how native parse trees are projected into the AST arena and the
//! limits applied to each parse call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ParserOverrides};
use super::preset::Preset;
use super::validation::Validatable;
use crate::shared::constants::config::SUPPORTED_VERSIONS;

/// Upper bound for `timeout_micros` (10 minutes)
const MAX_TIMEOUT_MICROS: u64 = 600_000_000;

/// Upper bound for `max_source_bytes` (1 GiB)
const MAX_SOURCE_BYTES: usize = 1 << 30;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Preset the remaining fields were derived from
    pub preset: Preset,

    /// Keep unnamed grammar tokens (punctuation, keywords)
    pub include_anonymous_nodes: bool,

    /// Keep extra nodes (comments)
    pub include_extras: bool,

    /// Store source text on leaf nodes
    pub capture_leaf_text: bool,

    /// Record each child's grammar field name under the `field` metadata key
    pub record_field_names: bool,

    /// Native parse timeout in microseconds (0 = unlimited)
    pub timeout_micros: u64,

    /// Reject sources larger than this many bytes (0 = unlimited)
    pub max_source_bytes: usize,
}

impl ParserConfig {
    /// Level 1: Create from preset
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                preset,
                include_anonymous_nodes: false,
                include_extras: false,
                capture_leaf_text: false,
                record_field_names: false,
                timeout_micros: 0,
                max_source_bytes: 0,
            },
            Preset::Balanced => Self {
                preset,
                include_anonymous_nodes: false,
                include_extras: true,
                capture_leaf_text: true,
                record_field_names: true,
                timeout_micros: 0,
                max_source_bytes: 0,
            },
            Preset::Thorough => Self {
                preset,
                include_anonymous_nodes: true,
                include_extras: true,
                capture_leaf_text: true,
                record_field_names: true,
                timeout_micros: 0,
                max_source_bytes: 0,
            },
        }
    }

    pub fn include_anonymous_nodes(mut self, enabled: bool) -> Self {
        self.include_anonymous_nodes = enabled;
        self
    }

    pub fn include_extras(mut self, enabled: bool) -> Self {
        self.include_extras = enabled;
        self
    }

    pub fn capture_leaf_text(mut self, enabled: bool) -> Self {
        self.capture_leaf_text = enabled;
        self
    }

    pub fn record_field_names(mut self, enabled: bool) -> Self {
        self.record_field_names = enabled;
        self
    }

    pub fn timeout_micros(mut self, micros: u64) -> Self {
        self.timeout_micros = micros;
        self
    }

    pub fn max_source_bytes(mut self, bytes: usize) -> Self {
        self.max_source_bytes = bytes;
        self
    }

    /// Build and validate
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Apply YAML overrides on top of the current values
    pub fn apply_overrides(mut self, overrides: ParserOverrides) -> Self {
        if let Some(v) = overrides.include_anonymous_nodes {
            self.include_anonymous_nodes = v;
        }
        if let Some(v) = overrides.include_extras {
            self.include_extras = v;
        }
        if let Some(v) = overrides.capture_leaf_text {
            self.capture_leaf_text = v;
        }
        if let Some(v) = overrides.record_field_names {
            self.record_field_names = v;
        }
        if let Some(v) = overrides.timeout_micros {
            self.timeout_micros = v;
        }
        if let Some(v) = overrides.max_source_bytes {
            self.max_source_bytes = v;
        }
        self
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!("Loading parser config from {}", path);
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            config = config.apply_overrides(overrides);
        }

        config.build()
    }

    /// Export to YAML
    ///
    /// Every field is written as an override so the file is self-describing.
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: Some(ParserOverrides {
                include_anonymous_nodes: Some(self.include_anonymous_nodes),
                include_extras: Some(self.include_extras),
                capture_leaf_text: Some(self.capture_leaf_text),
                record_field_names: Some(self.record_field_names),
                timeout_micros: Some(self.timeout_micros),
                max_source_bytes: Some(self.max_source_bytes),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for ParserConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.timeout_micros > MAX_TIMEOUT_MICROS {
            return Err(ConfigError::range_with_hint(
                "timeout_micros",
                self.timeout_micros,
                0,
                MAX_TIMEOUT_MICROS,
                "Use 0 for no timeout",
            ));
        }

        if self.max_source_bytes > MAX_SOURCE_BYTES {
            return Err(ConfigError::range_with_hint(
                "max_source_bytes",
                self.max_source_bytes,
                0,
                MAX_SOURCE_BYTES,
                "Use 0 for no size limit",
            ));
        }

        Ok(())
    }
}
