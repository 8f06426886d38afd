use crate::{RenderableFinding, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Artifactflow report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
        RenderableVerdictStatus::Error => "ERROR",
    };
    out.push_str(&format!("- Verdict: **{}**\n", verdict));
    if let Some(id) = &report.artifact_id {
        out.push_str(&format!("- Artifact: {}\n", code_span(id)));
    }
    if let Some(env) = &report.environment {
        out.push_str(&format!("- Environment: {}\n", code_span(env)));
    }
    out.push_str(&format!("- Profile: {}\n\n", report.profile));

    if let Some(err) = &report.error {
        out.push_str(&format!("> Error: {}\n", escape_text(err)));
        return out;
    }

    let (blocking, advisory): (Vec<&RenderableFinding>, Vec<&RenderableFinding>) =
        report.findings.iter().partition(|f| f.blocking);

    if blocking.is_empty() && advisory.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    if !blocking.is_empty() {
        out.push_str("## Violations\n\n");
        push_findings(&mut out, &blocking);
    }
    if !advisory.is_empty() {
        if !blocking.is_empty() {
            out.push('\n');
        }
        out.push_str("## Advisories\n\n");
        push_findings(&mut out, &advisory);
    }

    out
}

fn push_findings(out: &mut String, findings: &[&RenderableFinding]) {
    for f in findings {
        out.push_str(&format!(
            "- {} / {}: {}\n",
            code_span(&f.rule_id),
            code_span(&f.code),
            escape_text(&f.message)
        ));
    }
}

/// Inline code span that survives backticks in `s` (fence one longer than the longest run).
fn code_span(s: &str) -> String {
    let s = s.replace(['\n', '\r'], " ");
    let mut longest = 0;
    let mut run = 0;
    for c in s.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    if longest == 0 {
        return format!("`{s}`");
    }
    let fence = "`".repeat(longest + 1);
    format!("{fence} {s} {fence}")
}

/// Backslash-escape characters that would start inline markup in plain text.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(rule_id: &str, code: &str, message: &str, blocking: bool) -> RenderableFinding {
        RenderableFinding {
            rule_id: rule_id.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            blocking,
        }
    }

    #[test]
    fn renders_passing_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            artifact_id: Some("svc-1".to_string()),
            environment: Some("development".to_string()),
            profile: "strict".to_string(),
            findings: Vec::new(),
            error: None,
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Artifact: `svc-1`"));
        assert!(md.contains("No violations"));
    }

    #[test]
    fn renders_violations_and_advisories_separately() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            artifact_id: Some("svc-1".to_string()),
            environment: Some("production".to_string()),
            profile: "lenient".to_string(),
            findings: vec![
                finding("cve-high", "above_maximum", "3 is greater than 2", true),
                finding("coverage", "below_minimum", "72 is less than 80", false),
            ],
            error: None,
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("## Violations"));
        assert!(md.contains("- `cve-high` / `above_maximum`: 3 is greater than 2"));
        assert!(md.contains("## Advisories"));
        let violations_at = md.find("## Violations").expect("violations heading");
        let advisories_at = md.find("## Advisories").expect("advisories heading");
        assert!(violations_at < advisories_at);
        assert!(md[advisories_at..].contains("72 is less than 80"));
    }

    #[test]
    fn backticks_in_user_text_are_escaped() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            artifact_id: Some("svc`1".to_string()),
            environment: None,
            profile: "strict".to_string(),
            findings: vec![finding(
                "odd`rule",
                "not_equal",
                "`rm -rf` is not equal to *safe*",
                true,
            )],
            error: None,
        };

        let md = render_markdown(&report);
        assert!(md.contains("- Artifact: `` svc`1 ``"));
        assert!(md.contains(
            "- `` odd`rule `` / `not_equal`: \\`rm -rf\\` is not equal to \\*safe\\*"
        ));
    }

    #[test]
    fn plain_text_is_left_alone() {
        assert_eq!(code_span("cve-high"), "`cve-high`");
        assert_eq!(escape_text("3 is greater than 2"), "3 is greater than 2");
        assert_eq!(code_span("a``b"), "``` a``b ```");
    }

    #[test]
    fn renders_error_without_findings_section() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Error,
            artifact_id: None,
            environment: None,
            profile: "strict".to_string(),
            findings: Vec::new(),
            error: Some("artifact not found: ghost".to_string()),
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **ERROR**"));
        assert!(md.contains("> Error: artifact not found: ghost"));
        assert!(!md.contains("No violations"));
        assert!(!md.contains("Artifact:"));
    }
}
