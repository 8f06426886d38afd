//! The `explain` use case: look up violation code documentation.

use artifactflow_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        code: String,
        explanation: Explanation,
    },
    /// Unknown code; includes the known codes.
    NotFound {
        identifier: String,
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(explanation) => ExplainOutput::Found {
            code: identifier.to_string(),
            explanation,
        },
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Terminal layout: `code: title`, the description, the fix, then the failing and
/// passing rule/artifact pair indented underneath.
pub fn format_explanation(code: &str, exp: &Explanation) -> String {
    let mut out = format!("{code}: {}\n\n", exp.title);
    out.push_str(exp.description);
    out.push_str("\n\nHow to fix:\n");
    push_indented(&mut out, exp.remediation);
    out.push_str("\nFails:\n");
    push_indented(&mut out, exp.examples.before);
    out.push_str("\nPasses:\n");
    push_indented(&mut out, exp.examples.after);
    out
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
}

pub fn format_not_found(identifier: &str, codes: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown code: {}\n\n", identifier));
    out.push_str("Available codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
