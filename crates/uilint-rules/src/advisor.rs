//! # Advisor — Optional Detection Collaborator
//!
//! The orchestrator does not call the detector or heuristics directly. It
//! holds an `Option<Arc<dyn Advisor>>`: `None` means pattern detection and
//! heuristics are off, and the report simply carries no such findings.
//! Alternative rule sources plug in by implementing this trait.

use std::fmt;

use serde_json::Value;
use uilint_core::{CanonicalText, Finding};

use crate::detector::PatternDetector;
use crate::pattern::RuleTier;
use crate::suggest;

/// Document-wide detection: pattern rules and shape heuristics.
///
/// Implementations must be pure: the same input yields the same output, and
/// no state is shared between calls.
pub trait Advisor: Send + Sync + fmt::Debug {
    /// Findings from the rules of one tier matched against `text`.
    fn detect(&self, text: &CanonicalText, tier: RuleTier) -> Vec<Finding>;

    /// Free-form hints for `schema`.
    fn suggest(&self, schema: &Value) -> Vec<String>;
}

/// The built-in rule tables and heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAdvisor;

impl Advisor for BuiltinAdvisor {
    fn detect(&self, text: &CanonicalText, tier: RuleTier) -> Vec<Finding> {
        PatternDetector::builtin().detect(text, tier)
    }

    fn suggest(&self, schema: &Value) -> Vec<String> {
        suggest::suggest(schema)
    }
}
