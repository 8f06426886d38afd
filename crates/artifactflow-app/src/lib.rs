//! Use case orchestration for artifactflow.
//!
//! This crate provides the application layer: use cases that coordinate the settings, store,
//! domain, and render layers. The CLI crate depends on this; it only handles argument parsing,
//! I/O, and exit codes.

#![forbid(unsafe_code)]

mod config;
mod explain;
mod render;
mod report;
mod rules;
mod validate;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, write_report, write_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use rules::{RulesInput, RulesOutput, format_active_rules, run_active_rules};
pub use validate::{ValidateInput, ValidateOutput, run_validate, verdict_exit_code};
