//! The `validate` use case: validate one artifact for one environment and produce a report.

use crate::config;
use anyhow::Context;
use artifactflow_settings::{Overrides, ResolvedConfig};
use artifactflow_types::{SCHEMA_REPORT_V1, ToolMeta, ValidationReport, ValidationRequest, Verdict};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Snapshot file holding artifacts, rules, and mappings.
    pub snapshot: &'a Utf8Path,
    pub artifact_id: String,
    /// Falls back to `default_environment` from config.
    pub environment: Option<String>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: ValidationReport,
    pub resolved_config: ResolvedConfig,
}

/// Resolve config, load the store, run the engine, and wrap the result in a report envelope.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = config::resolve(input.config_text, input.overrides)?;
    let environment = config::pick_environment(input.environment, &resolved)?;
    let store = artifactflow_store::load_snapshot(input.snapshot).context("load store")?;

    let request = ValidationRequest {
        artifact_id: input.artifact_id,
        environment,
    };
    let validation =
        artifactflow_domain::validate_record_for_environment(&store, &request, &resolved.effective)
            .with_context(|| {
                format!(
                    "validate {} for {}",
                    request.artifact_id, request.environment
                )
            })?;

    let verdict = if validation.response.passes {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    tracing::info!(
        target: "artifactflow::app",
        artifact = %request.artifact_id,
        environment = %request.environment,
        profile = %resolved.effective.profile,
        verdict = ?verdict,
        "validation finished"
    );

    let report = ValidationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "artifactflow".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        profile: resolved.effective.profile.clone(),
        verdict,
        findings: validation.outcome.findings(),
        result: Some(validation.response),
        error: None,
        error_code: None,
    };

    Ok(ValidateOutput {
        report,
        resolved_config: resolved,
    })
}

pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
        Verdict::Error => 1,
    }
}
