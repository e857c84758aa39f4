//! # Schema Node Accessors
//!
//! Schema documents are untyped `serde_json::Value` trees. Validators never
//! index into them directly; they go through these helpers so that every
//! "is this field set?" question is answered the same way.
//!
//! ## Presence
//!
//! A field is *present* when it exists and holds a truthy value: anything
//! except `null`, `false`, a zero number, or the empty string. Empty arrays
//! and empty objects are present. Authoring tools routinely emit
//! `"title": ""` or `"api": null` as placeholders, and those must be reported
//! exactly like an absent key.

use serde_json::Value;

/// Returns whether a value counts as set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a present field. Non-object nodes have no fields.
pub fn field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key).filter(|v| is_truthy(v))
}

/// Returns whether `key` is present on `node`.
pub fn has(node: &Value, key: &str) -> bool {
    field(node, key).is_some()
}

/// Returns whether at least one of `keys` is present on `node`.
pub fn has_any(node: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| has(node, key))
}

/// A present field holding a string.
pub fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    field(node, key).and_then(Value::as_str)
}

/// A present field holding an array.
pub fn array_field<'a>(node: &'a Value, key: &str) -> Option<&'a [Value]> {
    field(node, key).and_then(Value::as_array).map(Vec::as_slice)
}

/// The declared component type of a node, if it has a string `type`.
pub fn type_tag(node: &Value) -> Option<&str> {
    str_field(node, "type")
}

/// Returns whether `value` nests containers deeper than `limit`.
///
/// Scalars have depth 0; an array or object is one level deeper than its
/// deepest child. The walk uses an explicit stack and stops at the first
/// container past the limit, so it is safe on arbitrarily deep input.
pub fn exceeds_depth(value: &Value, limit: usize) -> bool {
    let mut stack: Vec<(&Value, usize)> = vec![(value, 1)];
    while let Some((current, level)) = stack.pop() {
        let is_container = matches!(current, Value::Array(_) | Value::Object(_));
        if is_container && level > limit {
            return true;
        }
        match current {
            Value::Array(items) => stack.extend(items.iter().map(|child| (child, level + 1))),
            Value::Object(map) => stack.extend(map.values().map(|child| (child, level + 1))),
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_matches_placeholder_conventions() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_field_ignores_placeholders() {
        let node = json!({"title": "", "api": null, "body": [], "label": "Save"});
        assert!(!has(&node, "title"));
        assert!(!has(&node, "api"));
        assert!(!has(&node, "missing"));
        assert!(has(&node, "body"));
        assert_eq!(str_field(&node, "label"), Some("Save"));
    }

    #[test]
    fn test_non_object_has_no_fields() {
        assert!(!has(&json!("type"), "type"));
        assert!(!has(&json!([{"type": "x"}]), "type"));
        assert_eq!(type_tag(&json!(42)), None);
    }

    #[test]
    fn test_has_any() {
        let node = json!({"initApi": "/init"});
        assert!(has_any(&node, &["api", "initApi"]));
        assert!(!has_any(&node, &["label", "icon"]));
    }

    #[test]
    fn test_array_field_requires_array() {
        let node = json!({"steps": [{}], "columns": {"name": "id"}});
        assert_eq!(array_field(&node, "steps").map(<[Value]>::len), Some(1));
        assert!(array_field(&node, "columns").is_none());
    }

    #[test]
    fn test_type_tag_requires_string() {
        assert_eq!(type_tag(&json!({"type": "page"})), Some("page"));
        assert_eq!(type_tag(&json!({"type": 3})), None);
    }

    #[test]
    fn test_exceeds_depth() {
        assert!(!exceeds_depth(&json!({"a": 1}), 1));
        assert!(exceeds_depth(&json!({"a": {"b": {}}}), 2));
        assert!(!exceeds_depth(&json!({"a": {"b": {}}}), 3));
        assert!(!exceeds_depth(&json!("scalar"), 0));
    }

    #[test]
    fn test_exceeds_depth_on_deep_input() {
        let mut value = json!({});
        for _ in 0..1_000 {
            value = json!([value]);
        }
        assert!(exceeds_depth(&value, 128));
        assert!(!exceeds_depth(&value, 1_001));
    }
}
