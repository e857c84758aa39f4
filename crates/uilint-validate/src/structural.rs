//! # Structural Validators
//!
//! One validator per component kind. Each inspects the fields its kind
//! requires or recommends and appends findings to the shared report.
//!
//! ## Severity Policy
//!
//! - A field without which the component cannot function is an **error**
//!   (a CRUD with no data source, a dialog with no content).
//! - A field that is conventional but whose absence may be intentional is a
//!   **warning** (a form may be read-only, a dialog may be untitled).
//! - Style recommendations are **info**.
//!
//! Per-item findings carry the item's zero-based index.

use serde_json::Value;
use uilint_core::{node, ValidationReport};

use crate::component::ComponentKind;

/// Form item types that carry no data and so need no `name`.
const NON_DATA_CONTROLS: [&str; 3] = ["button", "submit", "reset"];

/// Run the structural validator for `kind`, if it has one.
pub fn validate_component(kind: ComponentKind, schema: &Value, report: &mut ValidationReport) {
    match kind {
        ComponentKind::Page => validate_page(schema, report),
        ComponentKind::Form => validate_form(schema, report),
        ComponentKind::Crud => validate_crud(schema, report),
        ComponentKind::Dialog | ComponentKind::Drawer => validate_dialog(kind, schema, report),
        ComponentKind::Button => validate_button(schema, report),
        ComponentKind::Wizard => validate_wizard(schema, report),
        ComponentKind::Other => {}
    }
}

/// `page`: `body` is recommended.
pub fn validate_page(schema: &Value, report: &mut ValidationReport) {
    if !node::has(schema, "body") {
        report.add_warning("Page should configure `body`");
    }
}

/// `form`: needs `body` (or legacy `controls`); data items need `name`;
/// a submit target is recommended.
pub fn validate_form(schema: &Value, report: &mut ValidationReport) {
    let items = node::field(schema, "body").or_else(|| node::field(schema, "controls"));

    match items {
        None => report.add_error("Form must configure `body` (or legacy `controls`)"),
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                if !node::has(item, "type") {
                    continue;
                }
                let non_data = node::type_tag(item).is_some_and(|t| NON_DATA_CONTROLS.contains(&t));
                if !non_data && !node::has(item, "name") {
                    report.add_warning(format!("form item [{index}] should configure `name`"));
                }
            }
        }
        Some(_) => {}
    }

    if !node::has_any(schema, &["api", "initApi"]) {
        report.add_warning("Form should configure `api` (or `initApi`) for data submission");
    }
}

/// `crud`: needs `api` and a `columns` array; an operation column is
/// recommended.
pub fn validate_crud(schema: &Value, report: &mut ValidationReport) {
    if !node::has(schema, "api") {
        report.add_error("CRUD must configure `api`");
    }

    match node::field(schema, "columns") {
        None => report.add_error("CRUD must configure `columns`"),
        Some(Value::Array(columns)) => {
            let has_operation = columns
                .iter()
                .any(|column| node::type_tag(column) == Some("operation"));
            if !has_operation {
                report.add_info("CRUD should add an `operation` column for row action buttons");
            }
        }
        Some(_) => report.add_error("CRUD `columns` must be an array"),
    }
}

/// `dialog` / `drawer`: needs `body`; `title` is recommended.
pub fn validate_dialog(kind: ComponentKind, schema: &Value, report: &mut ValidationReport) {
    if !node::has(schema, "body") {
        report.add_error(format!("{kind} must configure `body`"));
    }
    if !node::has(schema, "title") {
        report.add_warning(format!("{kind} should configure `title`"));
    }
}

/// `button`: should be identifiable and should do something.
pub fn validate_button(schema: &Value, report: &mut ValidationReport) {
    if !node::has_any(schema, &["label", "icon"]) {
        report.add_warning("Button should configure `label` or `icon`");
    }
    if !node::has_any(schema, &["actionType", "onEvent"]) {
        report.add_warning("Button should configure `actionType` or `onEvent`");
    }
}

/// `wizard`: needs a `steps` array; each step should have a title and
/// content; a final submission target is recommended.
pub fn validate_wizard(schema: &Value, report: &mut ValidationReport) {
    match node::array_field(schema, "steps") {
        None => report.add_error("Wizard must configure a `steps` array"),
        Some(steps) => {
            for (index, step) in steps.iter().enumerate() {
                if !node::has(step, "title") {
                    report.add_warning(format!("steps[{index}] should configure `title`"));
                }
                if !node::has_any(step, &["controls", "body"]) {
                    report.add_warning(format!(
                        "steps[{index}] should configure `controls` or `body`"
                    ));
                }
            }
        }
    }

    if !node::has(schema, "api") {
        report.add_warning("Wizard should configure `api` for final submission");
    }
}
