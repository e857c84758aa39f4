//! # Lint Configuration
//!
//! Tunables for a linter instance. Every field has a default, so an empty
//! YAML document is a valid configuration:
//!
//! ```yaml
//! max_depth: 128
//! key_order: document   # or "sorted"
//! pattern_checks: true
//! ```

use serde::{Deserialize, Serialize};

use crate::canonical::{EncodeOptions, KeyOrder};
use crate::error::ConfigError;

/// Default nesting limit for pattern detection.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for a linter instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Documents nesting deeper than this skip pattern detection.
    pub max_depth: usize,
    /// Key order of the canonical text used for pattern detection.
    pub key_order: KeyOrder,
    /// Whether the built-in pattern rules and heuristics run.
    pub pattern_checks: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            key_order: KeyOrder::Document,
            pattern_checks: true,
        }
    }
}

impl LintConfig {
    /// Parse and validate a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed YAML or unknown keys, and
    /// `ConfigError::Invalid` if a value violates a constraint.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a mapping.
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        tracing::debug!(?config, "loaded lint configuration");
        Ok(config)
    }

    /// Check value constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `max_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Encoder options derived from this configuration.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            key_order: self.key_order,
            max_depth: self.max_depth,
        }
    }
}
