//! Property-based tests for symptom report validation
//!
//! These tests verify that the validator behaves correctly
//! across a wide range of inputs.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use voicehealth_schemas::{
    symptom_report_schema, validate_str, validate_value, ValidationError,
};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-20.0f64..20.0).prop_map(|f| json!(f)),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        10, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::hash_map("[a-z_]{1,10}", inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for a member that is sometimes absent, sometimes well-typed
fn optional_member(well_typed: BoxedStrategy<Value>) -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        well_typed.prop_map(Some),
        json_value_strategy().prop_map(Some),
    ]
}

/// Strategy for objects that look more or less like symptom reports
fn report_like_strategy() -> impl Strategy<Value = Value> {
    let array = proptest::collection::vec(json_value_strategy(), 0..3)
        .prop_map(Value::Array)
        .boxed();
    let severity = prop_oneof![
        (-5.0f64..15.0).prop_map(|f| json!(f)),
        (-5i64..15).prop_map(|n| json!(n)),
    ]
    .boxed();

    (
        optional_member(array.clone()),
        optional_member(severity),
        optional_member(array),
        proptest::collection::hash_map("x_[a-z]{1,6}", json_value_strategy(), 0..3),
    )
        .prop_map(|(symptoms, severity, triggers, extra)| {
            let mut map = Map::new();
            for (key, value) in extra {
                map.insert(key, value);
            }
            if let Some(v) = symptoms {
                map.insert("symptoms".to_string(), v);
            }
            if let Some(v) = severity {
                map.insert("severity".to_string(), v);
            }
            if let Some(v) = triggers {
                map.insert("potential_triggers".to_string(), v);
            }
            Value::Object(map)
        })
}

proptest! {
    #[test]
    fn test_arbitrary_text_never_panics(input in ".{0,200}") {
        let _ = validate_str(&input);
    }

    #[test]
    fn test_validation_is_idempotent(value in json_value_strategy()) {
        let text = value.to_string();
        prop_assert_eq!(validate_str(&text), validate_str(&text));
    }

    #[test]
    fn test_text_and_value_paths_agree(value in report_like_strategy()) {
        let text = value.to_string();
        prop_assert_eq!(validate_str(&text), validate_value(&value));
    }

    #[test]
    fn test_non_object_roots_rejected(value in json_value_strategy()) {
        prop_assume!(!value.is_object());
        prop_assert_eq!(validate_value(&value), Err(ValidationError::RootNotObject));
    }

    #[test]
    fn test_in_range_severity_accepted(severity in 0.0f64..=10.0) {
        let value = json!({
            "symptoms": [],
            "severity": severity,
            "potential_triggers": []
        });
        prop_assert!(validate_value(&value).is_ok());
    }

    #[test]
    fn test_out_of_range_severity_rejected(severity in prop_oneof![-1e6f64..-1e-9, 10.000001f64..1e6]) {
        let value = json!({
            "symptoms": ["fatigue"],
            "severity": severity,
            "potential_triggers": ["sleep"]
        });
        prop_assert_eq!(validate_value(&value), Err(ValidationError::SeverityOutOfRange));
    }

    #[test]
    fn test_published_schema_agrees(value in report_like_strategy()) {
        let schema = symptom_report_schema();
        let compiled = jsonschema::validator_for(&schema).unwrap();
        prop_assert_eq!(validate_value(&value).is_ok(), compiled.is_valid(&value));
    }
}
