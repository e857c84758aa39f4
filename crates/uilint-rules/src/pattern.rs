//! # Pattern Rule Tables
//!
//! Three tiers of pattern rules. Each rule pairs a case-insensitive regex
//! with the finding it produces. Order within a tier carries no precedence:
//! every matching rule fires.
//!
//! ## Calibration
//!
//! These patterns describe problems in prose ("missing ... type",
//! "button ... without ... action"). Real schema text rarely contains such
//! phrases, so recall against ordinary documents is low; matches mostly come
//! from descriptive strings inside the document (labels, remarks, generated
//! error text). False positives on unrelated content are accepted. Do not
//! narrow a pattern without a corpus showing the misfire.

use uilint_core::{Finding, Severity};

/// Which rule table a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTier {
    /// Rules whose matches are errors.
    Error,
    /// Rules whose matches are warnings.
    Warning,
    /// Rules whose matches are informational.
    Info,
}

impl RuleTier {
    /// All tiers, in evaluation order.
    pub const ALL: [RuleTier; 3] = [RuleTier::Error, RuleTier::Warning, RuleTier::Info];

    /// Severity of findings produced by this tier.
    pub fn severity(self) -> Severity {
        match self {
            RuleTier::Error => Severity::Error,
            RuleTier::Warning => Severity::Warning,
            RuleTier::Info => Severity::Info,
        }
    }

    /// The built-in rule table for this tier.
    pub fn builtin_rules(self) -> &'static [PatternRule] {
        match self {
            RuleTier::Error => ERROR_RULES,
            RuleTier::Warning => WARNING_RULES,
            RuleTier::Info => INFO_RULES,
        }
    }
}

/// A single pattern rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    /// Stable identifier, used in logs.
    pub name: &'static str,
    /// Regex source, matched case-insensitively anywhere in the text.
    pub pattern: &'static str,
    /// Finding message.
    pub message: &'static str,
    /// Fix hint (error rules).
    pub fix: Option<&'static str>,
    /// Corrected snippet (error rules).
    pub example: Option<&'static str>,
    /// Advisory follow-up (warning and info rules).
    pub suggestion: Option<&'static str>,
}

impl PatternRule {
    /// Build the finding this rule reports at the given severity.
    pub fn to_finding(&self, severity: Severity) -> Finding {
        Finding {
            severity,
            message: self.message.to_string(),
            fix: self.fix.map(str::to_string),
            example: self.example.map(str::to_string),
            suggestion: self.suggestion.map(str::to_string),
        }
    }
}

/// Error-tier rules.
pub const ERROR_RULES: &[PatternRule] = &[
    PatternRule {
        name: "missing-type",
        pattern: r"missing.*type",
        message: "component is missing its `type` field",
        fix: Some(r#"add "type": "<component type>""#),
        example: Some(r#"{ "type": "page" }"#),
        suggestion: None,
    },
    PatternRule {
        name: "missing-form-item-name",
        pattern: r"missing.*name.*form",
        message: "form control is missing its `name` field",
        fix: Some("give every form control a unique `name`"),
        example: Some(r#"{ "type": "input-text", "name": "username" }"#),
        suggestion: None,
    },
    PatternRule {
        name: "missing-crud-api",
        pattern: r"missing.*api.*crud",
        message: "CRUD is missing its `api` configuration",
        fix: Some("add an `api` address to load data from"),
        example: Some(r#"{ "api": "/api/data" }"#),
        suggestion: None,
    },
    PatternRule {
        name: "missing-crud-columns",
        pattern: r"missing.*columns.*crud",
        message: "CRUD is missing its `columns` configuration",
        fix: Some("add `columns` to define the table columns"),
        example: Some(r#"{ "columns": [{ "name": "id", "label": "ID" }] }"#),
        suggestion: None,
    },
    PatternRule {
        name: "invalid-json",
        pattern: r"invalid.*json",
        message: "JSON syntax error",
        fix: Some("check the JSON syntax; quotes and brackets must be balanced"),
        example: Some(r#"{"key": "value"}"#),
        suggestion: None,
    },
];

/// Warning-tier rules.
pub const WARNING_RULES: &[PatternRule] = &[
    PatternRule {
        name: "button-without-action",
        pattern: r"button.*without.*action",
        message: "button has no action type",
        fix: None,
        example: None,
        suggestion: Some("set `actionType` to dialog, ajax, url, reload or similar"),
    },
    PatternRule {
        name: "form-without-api",
        pattern: r"form.*without.*api",
        message: "form has no submit API",
        fix: None,
        example: None,
        suggestion: Some("set `api` for data submission"),
    },
    PatternRule {
        name: "crud-without-operation",
        pattern: r"crud.*without.*operation",
        message: "CRUD has no operation column",
        fix: None,
        example: None,
        suggestion: Some("add a column with `type: operation` for row action buttons"),
    },
    PatternRule {
        name: "dialog-without-title",
        pattern: r"dialog.*without.*title",
        message: "dialog has no title",
        fix: None,
        example: None,
        suggestion: Some("set `title` so users know what the dialog is for"),
    },
    PatternRule {
        name: "missing-button-label",
        pattern: r"missing.*label.*button",
        message: "button has no label",
        fix: None,
        example: None,
        suggestion: Some("set `label` or `icon` so the button is identifiable"),
    },
];

/// Info-tier rules.
pub const INFO_RULES: &[PatternRule] = &[
    PatternRule {
        name: "form-horizontal",
        pattern: r"form.*horizontal",
        message: "form uses horizontal mode",
        fix: None,
        example: None,
        suggestion: Some("consider a responsive layout for mobile"),
    },
    PatternRule {
        name: "crud-table",
        pattern: r"crud.*table",
        message: "CRUD uses table mode",
        fix: None,
        example: None,
        suggestion: Some("consider list or cards mode for mobile"),
    },
    PatternRule {
        name: "without-loading",
        pattern: r"without.*loading",
        message: "consider adding a loading state",
        fix: None,
        example: None,
        suggestion: Some("configure loading feedback for asynchronous operations"),
    },
    PatternRule {
        name: "without-description",
        pattern: r"without.*description",
        message: "consider adding field descriptions",
        fix: None,
        example: None,
        suggestion: Some("add `description` to help users understand the field"),
    },
];
