//! # Cross-cutting Validators
//!
//! Checks that apply to any component kind: the shape of an `api` field and
//! of an `onEvent` mapping. Each runs only when its field is present.

use serde_json::Value;
use uilint_core::{node, ValidationReport};

/// Methods accepted as an `<method>:` prefix on a string API address.
const HTTP_METHODS: [&str; 4] = ["get", "post", "put", "delete"];

/// Returns whether `api` starts with `<method>:` for a known method,
/// ignoring case.
fn has_method_prefix(api: &str) -> bool {
    api.split_once(':')
        .is_some_and(|(method, _)| HTTP_METHODS.iter().any(|m| method.eq_ignore_ascii_case(m)))
}

/// Validate the `api` field.
///
/// A string address should be rooted (`/...`) or method-prefixed
/// (`post:/...`); other addressing schemes exist, so this is only a
/// warning. An object config must carry `url` and should carry `method`.
pub fn validate_api_config(schema: &Value, report: &mut ValidationReport) {
    match node::field(schema, "api") {
        Some(Value::String(api)) => {
            if !api.starts_with('/') && !has_method_prefix(api) {
                report.add_warning(
                    "API address should start with `/` or an HTTP method prefix such as `post:`",
                );
            }
        }
        Some(config) if config.is_object() => {
            if !node::has(config, "url") {
                report.add_error("API config is missing `url`");
            }
            if !node::has(config, "method") {
                report.add_warning("API config should configure `method`");
            }
        }
        _ => {}
    }
}

/// Validate the `onEvent` mapping.
///
/// Every event should list its `actions`, and every action should declare
/// an `actionType`. Events are visited in document order.
pub fn validate_event_actions(schema: &Value, report: &mut ValidationReport) {
    let Some(Value::Object(events)) = node::field(schema, "onEvent") else {
        return;
    };

    for (event, config) in events {
        let Some(actions) = node::array_field(config, "actions") else {
            report.add_warning(format!("onEvent.{event} should configure `actions`"));
            continue;
        };
        for (index, action) in actions.iter().enumerate() {
            if !node::has(action, "actionType") {
                report.add_warning(format!(
                    "onEvent.{event}.actions[{index}] should configure `actionType`"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_report(schema: Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        validate_api_config(&schema, &mut report);
        report
    }

    fn event_report(schema: Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        validate_event_actions(&schema, &mut report);
        report
    }

    fn messages(findings: &[uilint_core::Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn test_method_prefix() {
        assert!(has_method_prefix("post:/api/save"));
        assert!(has_method_prefix("GET:https://example.com"));
        assert!(has_method_prefix("Delete:/item/1"));
        assert!(!has_method_prefix("patch:/api"));
        assert!(!has_method_prefix("https://example.com/api"));
        assert!(!has_method_prefix("api/list"));
    }

    #[test]
    fn test_rooted_and_prefixed_strings_accepted() {
        assert!(api_report(json!({"api": "/api/list"})).is_empty());
        assert!(api_report(json!({"api": "post:/api/save"})).is_empty());
        assert!(api_report(json!({"api": "PUT:/api/item"})).is_empty());
    }

    #[test]
    fn test_unrooted_string_warns() {
        let report = api_report(json!({"api": "https://example.com/list"}));
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_object_config_requires_url() {
        let report = api_report(json!({"api": {"method": "post"}}));
        assert!(!report.valid);
        assert_eq!(messages(&report.errors), vec!["API config is missing `url`"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_object_config_without_method_warns() {
        let report = api_report(json!({"api": {"url": "/api/list"}}));
        assert!(report.valid);
        assert_eq!(messages(&report.warnings), vec!["API config should configure `method`"]);
    }

    #[test]
    fn test_complete_object_config() {
        assert!(api_report(json!({"api": {"url": "/api/list", "method": "get"}})).is_empty());
    }

    #[test]
    fn test_absent_or_other_shapes_skipped() {
        assert!(api_report(json!({"type": "page"})).is_empty());
        assert!(api_report(json!({"api": ""})).is_empty());
        assert!(api_report(json!({"api": 42})).is_empty());
        assert!(api_report(json!({"api": ["/a"]})).is_empty());
    }

    #[test]
    fn test_events_without_actions_warn() {
        let report = event_report(json!({
            "onEvent": {
                "click": {"weight": 1},
                "change": null
            }
        }));
        assert!(report.valid);
        assert_eq!(
            messages(&report.warnings),
            vec![
                "onEvent.click should configure `actions`",
                "onEvent.change should configure `actions`",
            ]
        );
    }

    #[test]
    fn test_actions_without_action_type_warn_indexed() {
        let report = event_report(json!({
            "onEvent": {
                "click": {
                    "actions": [
                        {"actionType": "toast"},
                        {"args": {}},
                        {"actionType": ""}
                    ]
                }
            }
        }));
        assert_eq!(
            messages(&report.warnings),
            vec![
                "onEvent.click.actions[1] should configure `actionType`",
                "onEvent.click.actions[2] should configure `actionType`",
            ]
        );
    }

    #[test]
    fn test_actions_must_be_array() {
        let report =
            event_report(json!({"onEvent": {"click": {"actions": {"actionType": "url"}}}}));
        assert_eq!(messages(&report.warnings), vec!["onEvent.click should configure `actions`"]);
    }

    #[test]
    fn test_well_formed_events() {
        let report = event_report(json!({
            "onEvent": {"click": {"actions": [{"actionType": "dialog"}]}}
        }));
        assert!(report.is_empty());
    }

    #[test]
    fn test_non_object_on_event_skipped() {
        assert!(event_report(json!({"onEvent": "click"})).is_empty());
        assert!(event_report(json!({})).is_empty());
    }
}
