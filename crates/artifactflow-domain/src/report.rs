use artifactflow_types::{Finding, ValidationResponse, ViolationMap};
use std::collections::BTreeMap;

/// One failed check: a stable code plus the message shown to callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub code: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result of evaluating one artifact against a rule set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub passes: bool,
    /// Violations that gate `passes`, keyed by rule id.
    pub violations: BTreeMap<String, Vec<Violation>>,
    /// Violations of non-enforced rules when advisories do not block.
    pub advisories: BTreeMap<String, Vec<Violation>>,
    /// Mapping `enforced` flag for every rule that produced violations.
    pub enforced: BTreeMap<String, bool>,
    pub rules_evaluated: usize,
    pub limits_evaluated: usize,
}

impl ValidationOutcome {
    pub fn violation_messages(&self) -> ViolationMap {
        messages(&self.violations)
    }

    pub fn advisory_messages(&self) -> ViolationMap {
        messages(&self.advisories)
    }

    /// Caller-facing response: `violations` only when the artifact fails.
    pub fn to_response(&self, artifact_id: &str, environment: &str) -> ValidationResponse {
        ValidationResponse {
            artifact_id: artifact_id.to_string(),
            environment: environment.to_string(),
            passes: self.passes,
            violations: (!self.passes).then(|| self.violation_messages()),
            advisories: self.advisory_messages(),
        }
    }

    /// Flatten into structured findings, blocking ones first.
    pub fn findings(&self) -> Vec<Finding> {
        let blocking = self.violations.iter().map(|entry| (entry, true));
        let advisory = self.advisories.iter().map(|entry| (entry, false));
        blocking
            .chain(advisory)
            .flat_map(|((rule_id, list), blocking)| {
                let enforced = self.enforced.get(rule_id).copied().unwrap_or(true);
                list.iter().map(move |v| Finding {
                    rule_id: rule_id.clone(),
                    code: v.code.to_string(),
                    message: v.message.clone(),
                    enforced,
                    blocking,
                })
            })
            .collect()
    }
}

fn messages(map: &BTreeMap<String, Vec<Violation>>) -> ViolationMap {
    map.iter()
        .map(|(rule_id, list)| {
            (
                rule_id.clone(),
                list.iter().map(|v| v.message.clone()).collect(),
            )
        })
        .collect()
}
