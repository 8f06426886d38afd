//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Path precedence and panic-free resolution over arbitrary documents
//! - Numeric coercion across integer, 32-bit integer and float representations
//! - Violation aggregation and determinism

use crate::engine::validate;
use crate::limit::evaluate_limit;
use crate::path::{KeyPath, resolve};
use crate::test_support::rule;
use artifactflow_types::{Artifact, Limit, LimitKind, Value};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<i32>().prop_map(Value::Int32),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        arb_key().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map(arb_key(), inner, 0..4).prop_map(Value::Map),
        ]
    })
}

fn arb_artifact() -> impl Strategy<Value = Artifact> {
    (
        arb_key(),
        arb_key(),
        prop::collection::btree_map(arb_key(), arb_value(), 0..6),
    )
        .prop_map(|(id, name, artifact_metadata)| Artifact {
            id,
            name,
            artifact_metadata,
            ..Artifact::default()
        })
}

/// Any dotted path, including ones with empty segments.
fn arb_raw_path() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![arb_key(), Just(String::new())], 1..5)
        .prop_map(|segments| segments.join("."))
}

/// One numeric quantity in its three accepted representations.
fn same_quantity(n: i32) -> [Value; 3] {
    [Value::Int(i64::from(n)), Value::Int32(n), Value::Float(f64::from(n))]
}

fn numeric_kind() -> impl Strategy<Value = LimitKind> {
    prop_oneof![Just(LimitKind::Min), Just(LimitKind::Max), Just(LimitKind::Equal)]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn single_segment_prefers_metadata(
        artifact in arb_artifact(),
        shadow in arb_value(),
    ) {
        let mut artifact = artifact;
        artifact.artifact_metadata.insert("name".to_string(), shadow.clone());
        let path = KeyPath::parse("name").unwrap();
        let got = resolve(&artifact, &path).map(|v| v.into_owned());
        prop_assert_eq!(got, Some(shadow));
    }

    #[test]
    fn resolution_never_panics(artifact in arb_artifact(), raw in arb_raw_path()) {
        if let Ok(path) = KeyPath::parse(&raw) {
            let _ = resolve(&artifact, &path);
        }
    }

    #[test]
    fn resolved_nested_values_exist_in_metadata(
        artifact in arb_artifact(),
        keys in prop::collection::vec(arb_key(), 2..4),
    ) {
        let path = KeyPath::parse(&format!("metadata.{}", keys.join("."))).unwrap();
        if let Some(found) = resolve(&artifact, &path) {
            let mut cursor: Option<&Value> = artifact.artifact_metadata.get(&keys[0]);
            for key in &keys[1..] {
                cursor = cursor.and_then(Value::as_map).and_then(|m| m.get(key));
            }
            prop_assert_eq!(cursor, Some(&*found));
        }
    }

    #[test]
    fn numeric_representations_agree(
        value in -10_000i32..10_000,
        bound in -10_000i32..10_000,
        kind in numeric_kind(),
    ) {
        let mut outcomes = Vec::new();
        for actual in same_quantity(value) {
            for limit_value in same_quantity(bound) {
                let limit = Limit { kind: kind.clone(), value: limit_value };
                outcomes.push(evaluate_limit(&actual, &limit).is_empty());
            }
        }
        prop_assert!(outcomes.windows(2).all(|w| w[0] == w[1]), "{:?}", outcomes);
    }

    #[test]
    fn violation_keys_match_failing_rules(
        high in 0i64..100,
        bounds in prop::collection::vec(0i64..100, 0..12),
    ) {
        let mut metadata = BTreeMap::new();
        metadata.insert("high".to_string(), Value::Int(high));
        let artifact = Artifact { artifact_metadata: metadata, ..Artifact::default() };

        let rules: Vec<_> = bounds
            .iter()
            .enumerate()
            .map(|(i, b)| rule(&format!("r{i}"), "metadata.high", LimitKind::Max, *b))
            .collect();
        let failing = bounds.iter().filter(|b| high > **b).count();

        let forward = validate(&artifact, &rules);
        prop_assert_eq!(forward.violations.len(), failing);
        prop_assert_eq!(forward.passes, failing == 0);

        let mut reversed = rules.clone();
        reversed.reverse();
        let backward = validate(&artifact, &reversed);
        prop_assert_eq!(backward.violation_messages(), forward.violation_messages());
        prop_assert_eq!(backward.passes, forward.passes);
    }

    #[test]
    fn validation_is_idempotent(artifact in arb_artifact(), raw in arb_raw_path(), bound in any::<i64>()) {
        let rules = vec![
            rule("max", &raw, LimitKind::Max, bound),
            rule("eq", &raw, LimitKind::Equal, "x"),
        ];
        let first = validate(&artifact, &rules);
        let second = validate(&artifact, &rules);
        prop_assert_eq!(first, second);
    }
}
