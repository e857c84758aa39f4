//! # Error Types
//!
//! Engine-internal faults. None of these ever reach a caller of the
//! validation entry point: the orchestrator logs them and carries on. They
//! exist so the fallible building blocks (encoding, config loading) can be
//! used on their own with ordinary `?` propagation.

use thiserror::Error;

/// Top-level error type for the linter.
#[derive(Error, Debug)]
pub enum UilintError {
    /// Canonical encoding failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error while producing canonical text for pattern detection.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The document nests deeper than the configured limit.
    #[error("schema nesting exceeds {limit} levels")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error while loading a [`LintConfig`](crate::config::LintConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML source could not be parsed.
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The parsed configuration violates a constraint.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
