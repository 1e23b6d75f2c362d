//! Property tests for the shared resolution pipeline.

#![allow(clippy::wildcard_imports)]

use proptest::prelude::*;
use serde_json::Value;

use rde_core::{NULL_SENTINEL, resolve_value};
use rde_model::{ParamType, ParameterRow, convert_value};

/// Render a converted value back to the cell text that would produce it.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

proptest! {
    #[test]
    fn integer_coercion_is_idempotent(n in any::<i64>()) {
        let once = convert_value(ParamType::Integer, &n.to_string()).expect("first conversion");
        let twice = convert_value(ParamType::Integer, &render(&once)).expect("second conversion");
        assert_eq!(once, twice);
    }

    #[test]
    fn number_coercion_is_idempotent(n in -1.0e12f64..1.0e12) {
        let once = convert_value(ParamType::Number, &n.to_string()).expect("first conversion");
        let twice = convert_value(ParamType::Number, &render(&once)).expect("second conversion");
        assert_eq!(once, twice);
    }

    #[test]
    fn string_coercion_is_idempotent(text in ".*") {
        let once = convert_value(ParamType::String, &text).expect("first conversion");
        let twice = convert_value(ParamType::String, &render(&once)).expect("second conversion");
        assert_eq!(once, twice);
    }

    #[test]
    fn boolean_coercion_is_idempotent(text in ".*") {
        let once = convert_value(ParamType::Boolean, &text).expect("first conversion");
        let twice = convert_value(ParamType::Boolean, &render(&once)).expect("second conversion");
        assert_eq!(once, twice);
    }

    #[test]
    fn inclusive_bounds_admit_their_own_value(v in -1.0e9f64..1.0e9) {
        let mut row = ParameterRow::new("p", ParamType::Number);
        row.examples = Some(v.to_string());
        row.minimum = Some(v);
        row.maximum = Some(v);
        assert!(resolve_value(&row, "doc").is_ok());
    }

    #[test]
    fn exclusive_bounds_reject_their_own_value(v in -1.0e9f64..1.0e9) {
        let mut row = ParameterRow::new("p", ParamType::Number);
        row.examples = Some(v.to_string());
        row.exclusive_minimum = Some(v);
        assert!(resolve_value(&row, "doc").is_err());

        let mut row = ParameterRow::new("p", ParamType::Number);
        row.examples = Some(v.to_string());
        row.exclusive_maximum = Some(v);
        assert!(resolve_value(&row, "doc").is_err());
    }

    #[test]
    fn optional_unresolved_rows_emit_the_sentinel(required in any::<bool>()) {
        let mut row = ParameterRow::new("p", ParamType::String);
        row.required = required;
        match resolve_value(&row, "doc") {
            Ok(value) => {
                assert!(!required);
                assert_eq!(value, Value::String(NULL_SENTINEL.to_string()));
            }
            Err(_) => assert!(required),
        }
    }
}
