//! # Findings and Validation Reports
//!
//! A [`Finding`] is one reported issue. A [`ValidationReport`] buckets
//! findings by severity and carries the overall verdict.
//!
//! ## Buckets
//!
//! | Severity     | Bucket        | Affects `valid` |
//! |--------------|---------------|-----------------|
//! | `error`      | `errors`      | yes             |
//! | `warning`    | `warnings`    | no              |
//! | `info`       | `suggestions` | no              |
//! | `suggestion` | `suggestions` | no              |
//!
//! Within a bucket, findings keep insertion order. The orchestrator runs
//! structural checks before pattern detection, so structural findings always
//! come first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Required field or shape violated. Blocks validity.
    Error,
    /// Recommended field absent.
    Warning,
    /// Informational hint from a structural or pattern rule.
    Info,
    /// Free-form improvement hint from the heuristic generator.
    Suggestion,
}

impl Severity {
    /// Returns whether findings of this severity invalidate a document.
    pub fn is_blocking(self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Lowercase name, as used in serialized findings.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue or suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity, serialized as `type`.
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// How to fix the problem (error pattern rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    /// A minimal corrected snippet (error pattern rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Advisory follow-up (warning and info pattern rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// A finding with only a severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            fix: None,
            example: None,
            suggestion: None,
        }
    }

    /// Shorthand for an `error` finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Shorthand for a `warning` finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Shorthand for an `info` finding.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Shorthand for a `suggestion` finding.
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, message)
    }

    /// Attach a fix hint.
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Attach an example snippet.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Attach an advisory follow-up.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {fix})")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {suggestion})")?;
        }
        Ok(())
    }
}

/// Outcome of validating one schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False iff an error was recorded.
    pub valid: bool,
    /// Error findings, in encounter order.
    pub errors: Vec<Finding>,
    /// Warning findings, in encounter order.
    pub warnings: Vec<Finding>,
    /// Info and suggestion findings, in encounter order.
    pub suggestions: Vec<Finding>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// An empty, valid report.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// A report rejecting the input outright with a single error.
    pub fn rejected(message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.add_error(message);
        report
    }

    /// Record a finding in the bucket matching its severity.
    ///
    /// Error findings mark the report invalid.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => {
                self.valid = false;
                self.errors.push(finding);
            }
            Severity::Warning => self.warnings.push(finding),
            Severity::Info | Severity::Suggestion => self.suggestions.push(finding),
        }
    }

    /// Record every finding from an iterator.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// Add an error. Marks the report invalid.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.push(Finding::error(message));
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.push(Finding::warning(message));
    }

    /// Add an info finding (does not affect validity).
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.push(Finding::info(message));
    }

    /// Add a suggestion finding (does not affect validity).
    pub fn add_suggestion(&mut self, message: impl Into<String>) {
        self.push(Finding::suggestion(message));
    }

    /// Total number of findings across all buckets.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.suggestions.len()
    }

    /// Returns true if no findings were recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All findings, errors first, then warnings, then suggestions.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.suggestions.iter())
    }
}
