//! Limit evaluation.
//!
//! Numbers compare in a common integer domain: `Int`, `Int32` and `Float` are all
//! accepted on both sides, and floats are truncated toward zero. Strings compare
//! exactly. Anything that cannot be compared yields a single violation describing
//! why, never an error.

use crate::report::Violation;
use artifactflow_types::{Limit, LimitKind, Value, ids};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scalar<'a> {
    Int(i64),
    Str(&'a str),
}

impl std::fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl Scalar<'_> {
    fn same_kind(&self, other: &Scalar<'_>) -> bool {
        matches!(
            (self, other),
            (Scalar::Int(_), Scalar::Int(_)) | (Scalar::Str(_), Scalar::Str(_))
        )
    }
}

fn coerce(value: &Value) -> Option<Scalar<'_>> {
    match value {
        Value::Int(n) => Some(Scalar::Int(*n)),
        Value::Int32(n) => Some(Scalar::Int(i64::from(*n))),
        Value::Float(x) => Some(Scalar::Int(*x as i64)),
        Value::String(s) => Some(Scalar::Str(s)),
        Value::Null | Value::Bool(_) | Value::List(_) | Value::Map(_) => None,
    }
}

/// Check a resolved artifact value against one limit.
pub fn evaluate_limit(value: &Value, limit: &Limit) -> Vec<Violation> {
    if let LimitKind::Unsupported(kind) = &limit.kind {
        return vec![Violation::new(
            ids::CODE_UNSUPPORTED_LIMIT_TYPE,
            format!(
                "unsupported limit type \"{kind}\", supported values are one of equal|min|max|set"
            ),
        )];
    }

    let Some(actual) = coerce(value) else {
        return vec![Violation::new(
            ids::CODE_UNSUPPORTED_VALUE_TYPE,
            format!(
                "unsupported artifact value type {} with value {}",
                value.type_name(),
                value
            ),
        )];
    };

    match &limit.kind {
        LimitKind::Min | LimitKind::Max => check_bound(actual, value, limit),
        LimitKind::Equal => check_equal(actual, value, limit),
        LimitKind::Set => check_membership(actual, value, limit),
        LimitKind::Unsupported(_) => Vec::new(),
    }
}

fn check_bound(actual: Scalar<'_>, value: &Value, limit: &Limit) -> Vec<Violation> {
    let Some(Scalar::Int(bound)) = coerce(&limit.value) else {
        return vec![unsupported_limit_value(limit)];
    };
    let Scalar::Int(v) = actual else {
        return vec![type_mismatch(value, limit)];
    };

    match limit.kind {
        LimitKind::Min if v < bound => vec![Violation::new(
            ids::CODE_BELOW_MINIMUM,
            format!("{v} is less than {bound}"),
        )],
        LimitKind::Max if v > bound => vec![Violation::new(
            ids::CODE_ABOVE_MAXIMUM,
            format!("{v} is greater than {bound}"),
        )],
        _ => Vec::new(),
    }
}

fn check_equal(actual: Scalar<'_>, value: &Value, limit: &Limit) -> Vec<Violation> {
    let Some(expected) = coerce(&limit.value) else {
        return vec![unsupported_limit_value(limit)];
    };
    if !actual.same_kind(&expected) {
        return vec![type_mismatch(value, limit)];
    }
    if actual == expected {
        Vec::new()
    } else {
        vec![Violation::new(
            ids::CODE_NOT_EQUAL,
            format!("{actual} is not equal to {expected}"),
        )]
    }
}

fn check_membership(actual: Scalar<'_>, value: &Value, limit: &Limit) -> Vec<Violation> {
    let members = match &limit.value {
        Value::List(items) => items.iter().map(coerce).collect::<Option<Vec<_>>>(),
        scalar => coerce(scalar).map(|s| vec![s]),
    };
    let Some(members) = members else {
        return vec![unsupported_limit_value(limit)];
    };

    if members.contains(&actual) {
        return Vec::new();
    }
    if !members.is_empty() && !members.iter().any(|m| m.same_kind(&actual)) {
        return vec![type_mismatch(value, limit)];
    }

    let allowed = members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    vec![Violation::new(
        ids::CODE_NOT_IN_SET,
        format!("{actual} is not one of [{allowed}]"),
    )]
}

fn unsupported_limit_value(limit: &Limit) -> Violation {
    Violation::new(
        ids::CODE_UNSUPPORTED_LIMIT_VALUE,
        format!(
            "unsupported limit value type {} with value {} for {}",
            limit.value.type_name(),
            limit.value,
            limit.kind
        ),
    )
}

fn type_mismatch(value: &Value, limit: &Limit) -> Violation {
    Violation::new(
        ids::CODE_TYPE_MISMATCH,
        format!(
            "cannot compare {} value {} with {} limit {}",
            value.type_name(),
            value,
            limit.value.type_name(),
            limit.value
        ),
    )
}
