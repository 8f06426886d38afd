//! Stable DTOs and IDs used across the artifactflow workspace.
//!
//! This crate is intentionally boring:
//! - the dynamic `Value` used by artifact metadata and limit values
//! - artifact, rule and mapping records as they are stored
//! - request/response and report envelope types
//! - stable violation codes and the explain registry

#![forbid(unsafe_code)]

pub mod artifact;
pub mod explain;
pub mod ids;
pub mod receipt;
pub mod rule;
pub mod value;

pub use artifact::Artifact;
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Finding, SCHEMA_REPORT_V1, ToolMeta, ValidationReport, ValidationRequest, ValidationResponse,
    Verdict, ViolationMap,
};
pub use rule::{Limit, LimitKind, Mapping, Rule};
pub use value::Value;
