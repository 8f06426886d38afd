//! The `rules` use case: list the rules active for an environment.

use crate::config;
use anyhow::Context;
use artifactflow_domain::ActiveRule;
use artifactflow_settings::Overrides;
use camino::Utf8Path;

#[derive(Clone, Debug)]
pub struct RulesInput<'a> {
    pub snapshot: &'a Utf8Path,
    pub environment: Option<String>,
    pub config_text: &'a str,
}

#[derive(Clone, Debug)]
pub struct RulesOutput {
    pub environment: String,
    pub rules: Vec<ActiveRule>,
}

pub fn run_active_rules(input: RulesInput<'_>) -> anyhow::Result<RulesOutput> {
    let resolved = config::resolve(input.config_text, Overrides::default())?;
    let environment = config::pick_environment(input.environment, &resolved)?;
    let store = artifactflow_store::load_snapshot(input.snapshot).context("load store")?;

    let rules = artifactflow_domain::active_rules_for(&store, &environment)
        .with_context(|| format!("resolve rules for {environment}"))?;

    Ok(RulesOutput { environment, rules })
}

/// One line per rule: id, path, enforced/advisory, limits.
pub fn format_active_rules(output: &RulesOutput) -> String {
    let mut out = String::new();

    if output.rules.is_empty() {
        out.push_str(&format!("No rules active for {}.\n", output.environment));
        return out;
    }

    out.push_str(&format!("Rules active for {}:\n", output.environment));
    for active in &output.rules {
        let limits = active
            .rule
            .limits
            .iter()
            .map(|l| format!("{} {}", l.kind, l.value))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  - {} [{}] {}: {}\n",
            active.rule.id,
            if active.enforced { "enforced" } else { "advisory" },
            active.rule.path,
            limits
        ));
    }

    out
}
