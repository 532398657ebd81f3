//! Layered configuration lookup.
//!
//! A key is looked up in the per-call operation inputs first, then in the
//! instance's runtime properties, then in the node's static properties.

use serde_json::{Map, Value};

pub type PropertyBag = Map<String, Value>;

/// First non-null value for `key`, in precedence order.
pub fn resolve<'a>(
    key: &str,
    inputs: &'a PropertyBag,
    runtime_properties: &'a PropertyBag,
    node_properties: &'a PropertyBag,
) -> Option<&'a Value> {
    [inputs, runtime_properties, node_properties]
        .into_iter()
        .filter_map(|layer| layer.get(key))
        .find(|value| !value.is_null())
}

/// First truthy value for `key`, in precedence order.
///
/// A falsy value in a higher layer does not shadow a truthy one below it.
pub fn resolve_truthy<'a>(
    key: &str,
    inputs: &'a PropertyBag,
    runtime_properties: &'a PropertyBag,
    node_properties: &'a PropertyBag,
) -> Option<&'a Value> {
    [inputs, runtime_properties, node_properties]
        .into_iter()
        .filter_map(|layer| layer.get(key))
        .find(|value| is_truthy(value))
}

/// `null`, `false`, zero, and empty strings, arrays and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> PropertyBag {
        match value {
            Value::Object(map) => map,
            _ => panic!("test bag must be an object"),
        }
    }

    #[test]
    fn inputs_win_over_runtime_and_node() {
        let inputs = bag(json!({"group_type": "from_inputs"}));
        let runtime = bag(json!({"group_type": "from_runtime"}));
        let node = bag(json!({"group_type": "from_node"}));

        assert_eq!(
            resolve("group_type", &inputs, &runtime, &node),
            Some(&json!("from_inputs"))
        );
    }

    #[test]
    fn runtime_wins_over_node() {
        let inputs = PropertyBag::new();
        let runtime = bag(json!({"group_name": "runtime"}));
        let node = bag(json!({"group_name": "node"}));

        assert_eq!(
            resolve("group_name", &inputs, &runtime, &node),
            Some(&json!("runtime"))
        );
    }

    #[test]
    fn falls_back_to_node() {
        let empty = PropertyBag::new();
        let node = bag(json!({"approach": "percentage"}));

        assert_eq!(
            resolve("approach", &empty, &empty, &node),
            Some(&json!("percentage"))
        );
        assert_eq!(resolve("missing", &empty, &empty, &node), None);
    }

    #[test]
    fn present_falsy_value_wins_for_plain_lookup() {
        let inputs = bag(json!({"unknown": ""}));
        let empty = PropertyBag::new();
        let node = bag(json!({"unknown": "ignore"}));

        assert_eq!(resolve("unknown", &inputs, &empty, &node), Some(&json!("")));
    }

    #[test]
    fn null_is_treated_as_absent() {
        let inputs = bag(json!({"target": null}));
        let empty = PropertyBag::new();
        let node = bag(json!({"target": "critical"}));

        assert_eq!(
            resolve("target", &inputs, &empty, &node),
            Some(&json!("critical"))
        );
    }

    #[test]
    fn truthy_lookup_skips_falsy_layers() {
        let inputs = bag(json!({"interval": 0}));
        let runtime = bag(json!({"interval": ""}));
        let node = bag(json!({"interval": 300}));

        assert_eq!(
            resolve_truthy("interval", &inputs, &runtime, &node),
            Some(&json!(300))
        );

        let empty = PropertyBag::new();
        assert_eq!(resolve_truthy("interval", &inputs, &empty, &empty), None);
    }

    #[test]
    fn truthiness_follows_value_shape() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(["web"])));
        assert!(is_truthy(&json!({"a": 1})));
    }
}
