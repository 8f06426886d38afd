use crate::environment::ActiveRule;
use crate::limit::evaluate_limit;
use crate::path::{KeyPath, resolve};
use crate::policy::EffectiveConfig;
use crate::report::{ValidationOutcome, Violation};
use artifactflow_types::{Artifact, Rule, ids};
use std::collections::BTreeMap;

/// Validate an artifact against plain rules, every one of them blocking.
pub fn validate(artifact: &Artifact, rules: &[Rule]) -> ValidationOutcome {
    let cfg = EffectiveConfig::default();
    run(artifact, rules.iter().map(|rule| (rule, true)), &cfg)
}

/// Validate an artifact against the rules selected for an environment.
pub fn evaluate(artifact: &Artifact, active: &[ActiveRule], cfg: &EffectiveConfig) -> ValidationOutcome {
    run(artifact, active.iter().map(|a| (&a.rule, a.enforced)), cfg)
}

fn run<'r>(
    artifact: &Artifact,
    rules: impl Iterator<Item = (&'r Rule, bool)>,
    cfg: &EffectiveConfig,
) -> ValidationOutcome {
    let mut violations: BTreeMap<String, Vec<Violation>> = BTreeMap::new();
    let mut advisories: BTreeMap<String, Vec<Violation>> = BTreeMap::new();
    let mut flags: BTreeMap<String, bool> = BTreeMap::new();
    let mut rules_evaluated = 0usize;
    let mut limits_evaluated = 0usize;

    for (rule, enforced) in rules {
        rules_evaluated += 1;
        limits_evaluated += rule.limits.len();

        let found = check_rule(artifact, rule);
        tracing::debug!(
            target: "artifactflow::engine",
            rule = %rule.id,
            path = %rule.path,
            limits = rule.limits.len(),
            violations = found.len(),
            enforced,
            "rule evaluated"
        );
        if found.is_empty() {
            continue;
        }

        let bucket = if cfg.blocks(enforced) {
            &mut violations
        } else {
            &mut advisories
        };
        bucket.entry(rule.id.clone()).or_default().extend(found);
        flags.insert(rule.id.clone(), enforced);
    }

    ValidationOutcome {
        passes: violations.is_empty(),
        violations,
        advisories,
        enforced: flags,
        rules_evaluated,
        limits_evaluated,
    }
}

fn check_rule(artifact: &Artifact, rule: &Rule) -> Vec<Violation> {
    if rule.limits.is_empty() {
        return vec![Violation::new(
            ids::CODE_NO_LIMITS,
            format!("rule {} has no limits for {}", rule.id, rule.path),
        )];
    }

    let path = KeyPath::parse(&rule.path).ok();
    let mut out = Vec::new();

    for limit in &rule.limits {
        let resolved = path.as_ref().and_then(|p| resolve(artifact, p));
        match resolved {
            Some(value) => out.extend(evaluate_limit(&value, limit)),
            None => out.push(Violation::new(
                ids::CODE_KEY_NOT_FOUND,
                format!("specified key not found: {}", rule.path),
            )),
        }
    }

    out
}
