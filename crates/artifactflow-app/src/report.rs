use anyhow::Context;
use artifactflow_render::{RenderableFinding, RenderableReport, RenderableVerdictStatus};
use artifactflow_types::{SCHEMA_REPORT_V1, ToolMeta, ValidationReport, Verdict, ids};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<ValidationReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    anyhow::ensure!(
        schema == SCHEMA_REPORT_V1,
        "unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})"
    );

    serde_json::from_value(value).context("parse artifactflow v1 report")
}

pub fn serialize_report(report: &ValidationReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn to_renderable(report: &ValidationReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
            Verdict::Error => RenderableVerdictStatus::Error,
        },
        artifact_id: report.result.as_ref().map(|r| r.artifact_id.clone()),
        environment: report.result.as_ref().map(|r| r.environment.clone()),
        profile: report.profile.clone(),
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                rule_id: f.rule_id.clone(),
                code: f.code.clone(),
                message: f.message.clone(),
                blocking: f.blocking,
            })
            .collect(),
        error: report.error.clone(),
    }
}

/// Report written when the tool itself failed (bad config, missing artifact, broken store).
pub fn runtime_error_report(profile: &str, message: &str) -> ValidationReport {
    let now = OffsetDateTime::now_utc();
    ValidationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "artifactflow".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        profile: profile.to_string(),
        verdict: Verdict::Error,
        result: None,
        findings: Vec::new(),
        error: Some(message.to_string()),
        error_code: Some(ids::CODE_RUNTIME_ERROR.to_string()),
    }
}
