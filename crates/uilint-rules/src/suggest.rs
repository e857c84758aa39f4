//! # Heuristic Suggestions
//!
//! Shape-based hints that need no pattern matching. Each heuristic looks at
//! the root node only and fires independently; output order is the order
//! below.
//!
//! 1. Horizontal forms: suggest a responsive layout for mobile.
//! 2. Table-mode CRUDs: suggest list mode on mobile.
//! 3. CRUDs with neither `loadDataOnce` nor `api`: suggest pagination.
//! 4. Buttons with neither `hiddenOn` nor `disabled`: suggest permission gating.

use serde_json::Value;
use uilint_core::node;

/// Hint for a horizontal form.
pub const RESPONSIVE_FORM: &str =
    "mobile adaptation: consider adding a responsive layout configuration";
/// Hint for a table-mode CRUD.
pub const MOBILE_LIST_MODE: &str =
    "mobile adaptation: consider switching to list mode on mobile devices";
/// Hint for a CRUD with no data loading strategy.
pub const PAGINATION: &str = "large datasets: consider `loadDataOnce` or a paginated `api`";
/// Hint for an ungated button.
pub const PERMISSION_GATING: &str =
    "consider gating this button by permission with `hiddenOn` or `disabled`";

/// Generate advisory hints for a schema document.
pub fn suggest(schema: &Value) -> Vec<String> {
    let mut suggestions = Vec::new();
    let kind = node::type_tag(schema);
    let mode = node::str_field(schema, "mode");

    if kind == Some("form") && mode == Some("horizontal") {
        suggestions.push(RESPONSIVE_FORM.to_string());
    }

    if kind == Some("crud") && mode == Some("table") {
        suggestions.push(MOBILE_LIST_MODE.to_string());
    }

    if kind == Some("crud") && !node::has_any(schema, &["loadDataOnce", "api"]) {
        suggestions.push(PAGINATION.to_string());
    }

    if kind == Some("button") && !node::has_any(schema, &["hiddenOn", "disabled"]) {
        suggestions.push(PERMISSION_GATING.to_string());
    }

    suggestions
}
