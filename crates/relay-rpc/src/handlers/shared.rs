//! Parameter extraction shared by the relay handlers.
//!
//! Params may arrive positionally (`[a, b, c]`, as XML-RPC style callers
//! send them) or by name (`{"a": ..}`). Named lookups accept several
//! spellings per parameter.

use interop_relay::{RelayError, Result};
use serde_json::{Map, Value};

/// Look up a parameter by position or by any of `names`.
pub(crate) fn get_param<'a>(params: &'a Value, index: usize, names: &[&str]) -> Option<&'a Value> {
    match params {
        Value::Array(items) => items.get(index),
        Value::Object(map) => names.iter().find_map(|name| map.get(*name)),
        _ => None,
    }
}

/// Reject positional params longer than the method's parameter count.
pub(crate) fn check_positional_count(params: &Value, max: usize) -> Result<()> {
    match params {
        Value::Array(items) if items.len() > max => Err(RelayError::InvalidParams {
            message: format!("Expected at most {} parameters, got {}", max, items.len()),
        }),
        _ => Ok(()),
    }
}

/// Extract a required numeric parameter or return an error.
pub(crate) fn require_f64_param(params: &Value, index: usize, names: &[&str]) -> Result<f64> {
    let name = names.first().copied().unwrap_or("?");
    match get_param(params, index, names) {
        Some(value) => value.as_f64().ok_or_else(|| RelayError::InvalidParams {
            message: format!("Parameter {} must be a number, got {}", name, value),
        }),
        None => Err(RelayError::InvalidParams {
            message: format!("Missing required parameter: {}", name),
        }),
    }
}

/// Extract the target field mapping.
///
/// Accepts `[{fields}]`, `{"target": {fields}}`, or `{fields}` directly.
pub(crate) fn require_target_fields(params: &Value) -> Result<Map<String, Value>> {
    let fields = match params {
        Value::Array(items) => items.first(),
        Value::Object(map) => match map.get("target") {
            Some(inner) if map.len() == 1 => Some(inner),
            _ => Some(params),
        },
        _ => None,
    };

    match fields {
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(other) => Err(RelayError::InvalidParams {
            message: format!("Target must be an object, got {}", other),
        }),
        None => Err(RelayError::InvalidParams {
            message: "Missing required parameter: target".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_and_named_params() {
        let positional = json!([37.1, -122.3]);
        let named = json!({"longitude": -122.3, "lat": 37.1});

        assert_eq!(require_f64_param(&positional, 0, &["lat", "latitude"]).unwrap(), 37.1);
        assert_eq!(require_f64_param(&named, 0, &["lat", "latitude"]).unwrap(), 37.1);
        assert_eq!(require_f64_param(&named, 1, &["lon", "longitude"]).unwrap(), -122.3);
    }

    #[test]
    fn test_integer_params_accepted() {
        assert_eq!(require_f64_param(&json!([100]), 0, &["alt"]).unwrap(), 100.0);
    }

    #[test]
    fn test_missing_and_wrong_type() {
        let err = require_f64_param(&json!([1.0]), 3, &["heading"]).unwrap_err();
        assert!(matches!(err, RelayError::InvalidParams { .. }));

        let err = require_f64_param(&json!({"heading": "north"}), 3, &["heading"]).unwrap_err();
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_target_field_shapes() {
        let fields = json!({"type": "standard"});
        assert_eq!(
            require_target_fields(&json!([fields.clone()])).unwrap(),
            fields.as_object().cloned().unwrap()
        );
        assert_eq!(
            require_target_fields(&json!({"target": fields.clone()})).unwrap(),
            fields.as_object().cloned().unwrap()
        );
        assert_eq!(
            require_target_fields(&fields).unwrap(),
            fields.as_object().cloned().unwrap()
        );
    }

    #[test]
    fn test_extra_positional_params_rejected() {
        assert!(check_positional_count(&json!([1, 2, 3, 4]), 4).is_ok());
        assert!(check_positional_count(&json!([]), 0).is_ok());
        assert!(check_positional_count(&json!({"a": 1, "b": 2}), 1).is_ok());

        let err = check_positional_count(&json!([1, 2, 3, 4, 5]), 4).unwrap_err();
        assert!(matches!(err, RelayError::InvalidParams { .. }));
        assert!(err.to_string().contains("got 5"));
    }

    #[test]
    fn test_wrapped_target_must_be_object() {
        let err = require_target_fields(&json!({"target": "circle"})).unwrap_err();
        assert!(matches!(err, RelayError::InvalidParams { .. }));
        assert_eq!(err.to_rpc_error_code(), -32602);
    }

    #[test]
    fn test_target_fields_rejects_non_object() {
        assert!(require_target_fields(&json!(["circle"])).is_err());
        assert!(require_target_fields(&json!([])).is_err());
        assert!(require_target_fields(&json!(42)).is_err());
    }
}
