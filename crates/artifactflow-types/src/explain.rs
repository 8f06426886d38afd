//! Explain registry for violation codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a violation code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// When the engine emits it.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples (JSON snippets).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that produces the violation.
    pub before: &'static str,
    /// Input that passes.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    match code {
        ids::CODE_KEY_NOT_FOUND => Some(explain_key_not_found()),
        ids::CODE_BELOW_MINIMUM => Some(explain_below_minimum()),
        ids::CODE_ABOVE_MAXIMUM => Some(explain_above_maximum()),
        ids::CODE_NOT_EQUAL => Some(explain_not_equal()),
        ids::CODE_NOT_IN_SET => Some(explain_not_in_set()),
        ids::CODE_UNSUPPORTED_LIMIT_TYPE => Some(explain_unsupported_limit_type()),
        ids::CODE_UNSUPPORTED_VALUE_TYPE => Some(explain_unsupported_value_type()),
        ids::CODE_UNSUPPORTED_LIMIT_VALUE => Some(explain_unsupported_limit_value()),
        ids::CODE_TYPE_MISMATCH => Some(explain_type_mismatch()),
        ids::CODE_NO_LIMITS => Some(explain_no_limits()),
        ids::CODE_RUNTIME_ERROR => Some(explain_runtime_error()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_KEY_NOT_FOUND,
        ids::CODE_BELOW_MINIMUM,
        ids::CODE_ABOVE_MAXIMUM,
        ids::CODE_NOT_EQUAL,
        ids::CODE_NOT_IN_SET,
        ids::CODE_UNSUPPORTED_LIMIT_TYPE,
        ids::CODE_UNSUPPORTED_VALUE_TYPE,
        ids::CODE_UNSUPPORTED_LIMIT_VALUE,
        ids::CODE_TYPE_MISMATCH,
        ids::CODE_NO_LIMITS,
        ids::CODE_RUNTIME_ERROR,
    ]
}

fn explain_key_not_found() -> Explanation {
    Explanation {
        title: "Specified Key Not Found",
        description: "\
The rule's key path did not resolve to a value on the artifact.

Paths are dot-separated. A single segment is looked up in the artifact metadata first
and then among the fixed attributes (id, name, description, type, family). A path that
starts with `metadata` (or `artifactMetadata`) descends into the metadata; any other
multi-segment path is also treated as a metadata path.

Resolution stops with this violation when a segment is missing or when an intermediate
value is not a nested object (lists and scalars cannot be descended into).",
        remediation: "\
Either record the expected key on the artifact, or correct the rule's `ruleKey` so it
matches the metadata layout actually produced by your pipeline.",
        examples: ExamplePair {
            before: r#"rule:     { "ruleKey": "metadata.cve.critical" }
artifact: { "metadata": { "cve": { "high": 3 } } }"#,
            after: r#"rule:     { "ruleKey": "metadata.cve.high" }
artifact: { "metadata": { "cve": { "high": 3 } } }"#,
        },
    }
}

fn explain_below_minimum() -> Explanation {
    Explanation {
        title: "Value Below Minimum",
        description: "\
A `min` limit failed: the artifact value is smaller than the limit.

Numbers are compared as integers. Floating-point values on either side are truncated
toward zero before comparing, so 79.9 against a minimum of 80 compares 79 with 80.",
        remediation: "\
Raise the measured value (for example, improve coverage) or lower the rule's minimum
for the environment where it is active.",
        examples: ExamplePair {
            before: r#"limit:    { "type": "min", "value": 80 }
artifact: { "metadata": { "coverage": 72 } }"#,
            after: r#"limit:    { "type": "min", "value": 80 }
artifact: { "metadata": { "coverage": 85 } }"#,
        },
    }
}

fn explain_above_maximum() -> Explanation {
    Explanation {
        title: "Value Above Maximum",
        description: "\
A `max` limit failed: the artifact value is greater than the limit.

Numbers are compared as integers after truncating any floating-point representation.",
        remediation: "\
Reduce the measured value (for example, fix the reported vulnerabilities) or relax the
rule's maximum for the environment.",
        examples: ExamplePair {
            before: r#"limit:    { "type": "max", "value": 2 }
artifact: { "metadata": { "cve": { "high": 3 } } }"#,
            after: r#"limit:    { "type": "max", "value": 5 }
artifact: { "metadata": { "cve": { "high": 3 } } }"#,
        },
    }
}

fn explain_not_equal() -> Explanation {
    Explanation {
        title: "Value Not Equal",
        description: "\
An `equal` limit failed. Strings are compared exactly (case-sensitive, no trimming).
Numbers are compared as truncated integers.",
        remediation: "\
Make the artifact attribute match the expected value exactly, or update the rule.",
        examples: ExamplePair {
            before: r#"limit:    { "type": "equal", "value": "signed" }
artifact: { "metadata": { "signature": "Signed" } }"#,
            after: r#"limit:    { "type": "equal", "value": "signed" }
artifact: { "metadata": { "signature": "signed" } }"#,
        },
    }
}

fn explain_not_in_set() -> Explanation {
    Explanation {
        title: "Value Not In Allowed Set",
        description: "\
A `set` limit failed: the artifact value is not one of the allowed values. A scalar
limit value is treated as a one-element set.",
        remediation: "\
Use one of the allowed values, or extend the rule's set.",
        examples: ExamplePair {
            before: r#"limit:    { "type": "set", "value": ["eu-west-1", "eu-central-1"] }
artifact: { "metadata": { "region": "us-east-1" } }"#,
            after: r#"limit:    { "type": "set", "value": ["eu-west-1", "eu-central-1"] }
artifact: { "metadata": { "region": "eu-west-1" } }"#,
        },
    }
}

fn explain_unsupported_limit_type() -> Explanation {
    Explanation {
        title: "Unsupported Limit Type",
        description: "\
The limit's `type` is not one of `equal`, `min`, `max`, `set` (or their aliases
`equality`, `eq`, `minimum`, `maximum`, `membership`, `in`). The limit cannot be
evaluated, so it counts as a violation rather than a silent pass.",
        remediation: "\
Fix the limit type in the rule definition.",
        examples: ExamplePair {
            before: r#"{ "type": "range", "value": 5 }"#,
            after: r#"[{ "type": "min", "value": 1 }, { "type": "max", "value": 5 }]"#,
        },
    }
}

fn explain_unsupported_value_type() -> Explanation {
    Explanation {
        title: "Unsupported Artifact Value Type",
        description: "\
The key path resolved, but to a value that cannot be compared: a nested object, a list,
a boolean or null. Only strings and numbers (integer, 32-bit integer, float) are
comparable.",
        remediation: "\
Point the rule at a scalar leaf (for example `metadata.cve.high` instead of
`metadata.cve`).",
        examples: ExamplePair {
            before: r#"{ "ruleKey": "metadata.cve", "ruleLimits": { "type": "max", "value": 5 } }"#,
            after: r#"{ "ruleKey": "metadata.cve.high", "ruleLimits": { "type": "max", "value": 5 } }"#,
        },
    }
}

fn explain_unsupported_limit_value() -> Explanation {
    Explanation {
        title: "Unsupported Limit Value",
        description: "\
The limit's comparison value does not fit its type: `min` and `max` need a number,
`equal` needs a string or number, and `set` needs a list of strings/numbers (or a
single string/number). A missing value is also reported here.",
        remediation: "\
Correct the `value` of the limit in the rule definition.",
        examples: ExamplePair {
            before: r#"{ "type": "max", "value": "five" }"#,
            after: r#"{ "type": "max", "value": 5 }"#,
        },
    }
}

fn explain_type_mismatch() -> Explanation {
    Explanation {
        title: "Type Mismatch",
        description: "\
The artifact value and the limit value have incompatible types, for example a string
artifact value compared against a numeric maximum. No coercion between strings and
numbers is attempted.",
        remediation: "\
Store the artifact attribute with the type the rule expects, or change the rule.",
        examples: ExamplePair {
            before: r#"limit:    { "type": "max", "value": 5 }
artifact: { "metadata": { "cve": { "high": "3" } } }"#,
            after: r#"limit:    { "type": "max", "value": 5 }
artifact: { "metadata": { "cve": { "high": 3 } } }"#,
        },
    }
}

fn explain_no_limits() -> Explanation {
    Explanation {
        title: "Rule Has No Limits",
        description: "\
The rule carries a key path but no constraint to check it against. Such a rule can never
pass or fail on its own merits, so it is reported instead of silently passing.

Snapshots reject an empty `ruleLimits` on load; this violation covers rules built in code.",
        remediation: "\
Give the rule at least one limit, or remove its mapping for this environment.",
        examples: ExamplePair {
            before: r#"{ "id": "cve-high", "ruleKey": "metadata.cve.high", "ruleLimits": [] }"#,
            after: r#"{ "id": "cve-high", "ruleKey": "metadata.cve.high", "ruleLimits": { "type": "max", "value": 2 } }"#,
        },
    }
}

fn explain_runtime_error() -> Explanation {
    Explanation {
        title: "Runtime Error",
        description: "\
Validation could not run: the artifact was not found, a rule mapping references a rule
that no longer exists, or the store/config could not be read. No pass/fail outcome is
produced in this case.",
        remediation: "\
Check the artifact id, restore or remove the dangling mapping, and re-run.",
        examples: ExamplePair {
            before: r#"mapping: { "ruleId": "deleted-rule", "environments": { "production": true } }"#,
            after: r#"mapping: { "ruleId": "existing-rule", "environments": { "production": true } }"#,
        },
    }
}
