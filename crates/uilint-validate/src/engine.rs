//! # Validation Orchestrator
//!
//! Runs every applicable check against one schema document and folds the
//! results into a single [`ValidationReport`].
//!
//! ## Pipeline
//!
//! 1. **Shape gate**: a non-object document is rejected with one error and
//!    nothing else runs.
//! 2. **Type**: a missing `type` is an error, but checking continues so the
//!    report describes as much of the document as possible.
//! 3. **Structural**: the validator for the declared [`ComponentKind`].
//! 4. **Cross-cutting**: `api` and `onEvent` checks, when those fields exist.
//! 5. **Advisor**: the document is encoded once, matched against the error,
//!    warning and info rule tiers, then the heuristics run.
//!
//! `valid` starts `true` and only an error finding can clear it. Failures
//! inside step 5 are logged and never reach the caller.

use std::sync::{Arc, LazyLock};

use serde_json::Value;
use uilint_core::{
    node, CanonicalText, CanonicalizationError, LintConfig, UilintError, ValidationReport,
};
use uilint_rules::{Advisor, BuiltinAdvisor, RuleTier};

use crate::component::ComponentKind;
use crate::crosscut;
use crate::structural;

/// Error reported for a document that is not a JSON object.
pub const NOT_AN_OBJECT: &str = "schema must be a valid structured object";

/// Error reported for a document without a `type`.
pub const MISSING_TYPE: &str = "missing required field: `type`";

static DEFAULT_LINTER: LazyLock<Linter> = LazyLock::new(Linter::default);

/// Validate a schema document with the default configuration.
pub fn validate(schema: &Value) -> ValidationReport {
    DEFAULT_LINTER.validate(schema)
}

/// A configured validation pipeline.
///
/// `Linter` holds no per-call state and is `Send + Sync`; share one behind
/// an `Arc` to validate from several threads.
#[derive(Debug, Clone)]
pub struct Linter {
    config: LintConfig,
    advisor: Option<Arc<dyn Advisor>>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

impl Linter {
    /// Build a linter; the built-in advisor is installed when
    /// `config.pattern_checks` is set.
    pub fn new(config: LintConfig) -> Self {
        let advisor: Option<Arc<dyn Advisor>> = if config.pattern_checks {
            Some(Arc::new(BuiltinAdvisor))
        } else {
            None
        };
        Self { config, advisor }
    }

    /// Build a linter with a custom advisor, regardless of
    /// `config.pattern_checks`.
    pub fn with_advisor(config: LintConfig, advisor: Arc<dyn Advisor>) -> Self {
        Self {
            config,
            advisor: Some(advisor),
        }
    }

    /// Build a linter that runs structural and cross-cutting checks only.
    pub fn without_advisor(config: LintConfig) -> Self {
        Self {
            config,
            advisor: None,
        }
    }

    /// Build a linter from a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns `UilintError::Config` if the configuration cannot be parsed
    /// or fails validation.
    pub fn from_yaml_str(source: &str) -> Result<Self, UilintError> {
        let config = LintConfig::from_yaml_str(source)?;
        Ok(Self::new(config))
    }

    /// The active configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Returns whether pattern detection and heuristics will run.
    pub fn has_advisor(&self) -> bool {
        self.advisor.is_some()
    }

    /// Validate one schema document.
    pub fn validate(&self, schema: &Value) -> ValidationReport {
        if !schema.is_object() {
            tracing::debug!("schema rejected: not an object");
            return ValidationReport::rejected(NOT_AN_OBJECT);
        }

        let mut report = ValidationReport::new();
        let kind = ComponentKind::of(schema);
        tracing::debug!(kind = ?kind, "validating schema");

        if !node::has(schema, "type") {
            report.add_error(MISSING_TYPE);
        }

        if let Some(kind) = kind {
            structural::validate_component(kind, schema, &mut report);
        }

        if node::has(schema, "api") {
            crosscut::validate_api_config(schema, &mut report);
        }
        if node::has(schema, "onEvent") {
            crosscut::validate_event_actions(schema, &mut report);
        }

        if let Some(advisor) = &self.advisor {
            self.advise(advisor.as_ref(), schema, &mut report);
        }

        tracing::debug!(
            valid = report.valid,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            suggestions = report.suggestions.len(),
            "schema validated"
        );
        report
    }

    /// Encode `schema` the way pattern detection sees it under this
    /// linter's configuration.
    ///
    /// # Errors
    ///
    /// Returns `UilintError::Canonicalization` if the document nests deeper
    /// than `max_depth` or cannot be serialized.
    pub fn canonical_text(&self, schema: &Value) -> Result<CanonicalText, UilintError> {
        Ok(CanonicalText::new(schema, &self.config.encode_options())?)
    }

    /// Run the advisor's pattern tiers and heuristics.
    fn advise(&self, advisor: &dyn Advisor, schema: &Value, report: &mut ValidationReport) {
        let text = match self.canonical_text(schema) {
            Ok(text) => text,
            Err(UilintError::Canonicalization(CanonicalizationError::DepthExceeded {
                limit,
            })) => {
                tracing::warn!(limit, "schema too deep for pattern checks");
                report.add_warning(format!(
                    "schema nesting exceeds {limit} levels; pattern checks skipped"
                ));
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "canonical encoding failed; pattern checks skipped");
                return;
            }
        };

        for tier in RuleTier::ALL {
            report.extend(advisor.detect(&text, tier));
        }
        for suggestion in advisor.suggest(schema) {
            report.add_suggestion(suggestion);
        }
    }
}
