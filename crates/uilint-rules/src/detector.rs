//! # Pattern Detector
//!
//! Matches compiled rule tables against a document's canonical text. Each
//! tier is evaluated independently, so one document may trigger rules from
//! several tiers at once.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use uilint_core::{CanonicalText, Finding};

use crate::pattern::{PatternRule, RuleTier};

/// A rule paired with its compiled pattern.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: PatternRule,
    regex: Regex,
}

/// Compile a rule table.
///
/// A pattern that fails to compile is logged and dropped; the remaining
/// rules still run.
fn compile(rules: &[PatternRule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter_map(|rule| {
            match RegexBuilder::new(rule.pattern).case_insensitive(true).build() {
                Ok(regex) => Some(CompiledRule { rule: *rule, regex }),
                Err(e) => {
                    tracing::error!(
                        rule = rule.name,
                        error = %e,
                        "pattern rule failed to compile, skipping"
                    );
                    None
                }
            }
        })
        .collect()
}

static BUILTIN: LazyLock<PatternDetector> = LazyLock::new(|| {
    PatternDetector::new(
        RuleTier::Error.builtin_rules(),
        RuleTier::Warning.builtin_rules(),
        RuleTier::Info.builtin_rules(),
    )
});

/// Compiled rule tables for all three tiers.
#[derive(Debug, Clone)]
pub struct PatternDetector {
    error: Vec<CompiledRule>,
    warning: Vec<CompiledRule>,
    info: Vec<CompiledRule>,
}

impl PatternDetector {
    /// Compile a detector from custom rule tables.
    pub fn new(error: &[PatternRule], warning: &[PatternRule], info: &[PatternRule]) -> Self {
        Self {
            error: compile(error),
            warning: compile(warning),
            info: compile(info),
        }
    }

    /// The detector for the built-in rule tables, compiled on first use.
    pub fn builtin() -> &'static PatternDetector {
        &BUILTIN
    }

    fn tier(&self, tier: RuleTier) -> &[CompiledRule] {
        match tier {
            RuleTier::Error => &self.error,
            RuleTier::Warning => &self.warning,
            RuleTier::Info => &self.info,
        }
    }

    /// Number of usable rules in a tier.
    pub fn rule_count(&self, tier: RuleTier) -> usize {
        self.tier(tier).len()
    }

    /// Report every rule in `tier` whose pattern occurs in `text`.
    ///
    /// Findings follow rule-table order.
    pub fn detect(&self, text: &CanonicalText, tier: RuleTier) -> Vec<Finding> {
        let severity = tier.severity();
        self.tier(tier)
            .iter()
            .filter(|compiled| compiled.regex.is_match(text.as_str()))
            .map(|compiled| {
                tracing::trace!(rule = compiled.rule.name, %severity, "pattern rule matched");
                compiled.rule.to_finding(severity)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uilint_core::{EncodeOptions, KeyOrder, Severity};

    fn text(value: serde_json::Value) -> CanonicalText {
        CanonicalText::new(&value, &EncodeOptions::default()).unwrap()
    }

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn test_all_builtin_rules_compile() {
        let detector = PatternDetector::builtin();
        for tier in RuleTier::ALL {
            assert_eq!(detector.rule_count(tier), tier.builtin_rules().len());
        }
    }

    #[test]
    fn test_plain_document_matches_nothing() {
        let detector = PatternDetector::builtin();
        let doc = text(json!({"type": "crud", "api": "/list", "columns": [{"name": "id"}]}));
        for tier in RuleTier::ALL {
            assert!(detector.detect(&doc, tier).is_empty(), "{tier:?} fired");
        }
    }

    #[test]
    fn test_info_rule_matches_crud_table_in_document_order() {
        let detector = PatternDetector::builtin();
        let doc = text(json!({"type": "crud", "mode": "table", "api": "/list"}));
        let findings = detector.detect(&doc, RuleTier::Info);
        assert_eq!(messages(&findings), vec!["CRUD uses table mode"]);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(findings[0].suggestion.is_some());
    }

    #[test]
    fn test_sorted_order_changes_recall() {
        let detector = PatternDetector::builtin();
        let options = EncodeOptions {
            key_order: KeyOrder::Sorted,
            ..EncodeOptions::default()
        };
        let value = json!({"type": "crud", "mode": "table", "api": "/list"});
        let doc = CanonicalText::new(&value, &options).unwrap();
        // "mode" sorts before "type", so "table" precedes "crud".
        assert!(detector.detect(&doc, RuleTier::Info).is_empty());
    }

    #[test]
    fn test_error_rule_is_case_insensitive() {
        let detector = PatternDetector::builtin();
        let doc = text(json!({"type": "tpl", "tpl": "MISSING component TYPE"}));
        let findings = detector.detect(&doc, RuleTier::Error);
        assert_eq!(messages(&findings), vec!["component is missing its `type` field"]);
        assert_eq!(findings[0].fix.as_deref(), Some(r#"add "type": "<component type>""#));
    }

    #[test]
    fn test_multiple_tiers_fire_on_one_document() {
        let detector = PatternDetector::builtin();
        let doc = text(json!({
            "type": "form",
            "mode": "horizontal",
            "remark": "form shipped without api, missing type on one item"
        }));
        assert!(!detector.detect(&doc, RuleTier::Error).is_empty());
        assert_eq!(
            messages(&detector.detect(&doc, RuleTier::Warning)),
            vec!["form has no submit API"]
        );
        assert_eq!(
            messages(&detector.detect(&doc, RuleTier::Info)),
            vec!["form uses horizontal mode"]
        );
    }

    #[test]
    fn test_several_rules_in_one_tier_fire_in_table_order() {
        let detector = PatternDetector::builtin();
        let doc = text(json!({"remark": "input without description, page without loading"}));
        assert_eq!(
            messages(&detector.detect(&doc, RuleTier::Info)),
            vec!["consider adding a loading state", "consider adding field descriptions"]
        );
    }

    #[test]
    fn test_bad_custom_pattern_is_dropped() {
        const RULES: &[PatternRule] = &[
            PatternRule {
                name: "broken",
                pattern: r"(unclosed",
                message: "never reported",
                fix: None,
                example: None,
                suggestion: None,
            },
            PatternRule {
                name: "todo",
                pattern: r"todo",
                message: "leftover TODO marker",
                fix: None,
                example: None,
                suggestion: None,
            },
        ];
        let detector = PatternDetector::new(&[], RULES, &[]);
        assert_eq!(detector.rule_count(RuleTier::Warning), 1);
        let doc = text(json!({"label": "TODO rename"}));
        assert_eq!(
            messages(&detector.detect(&doc, RuleTier::Warning)),
            vec!["leftover TODO marker"]
        );
        assert!(detector.detect(&doc, RuleTier::Error).is_empty());
    }
}
