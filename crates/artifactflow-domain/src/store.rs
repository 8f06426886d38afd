//! Storage seams.
//!
//! The engine never touches a backend directly; callers hand it something that
//! implements these traits.

use artifactflow_types::{Artifact, Mapping, Rule};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("rule not found: {0}")]
    RuleNotFound(String),

    #[error("duplicate {kind} id: {id}")]
    Duplicate { kind: &'static str, id: String },

    #[error("store backend failure: {0}")]
    Backend(String),
}

pub trait RuleStore {
    /// Mappings whose `environments` entry for `environment` is boolean `true`,
    /// in store order.
    fn fetch_mappings(&self, environment: &str) -> Result<Vec<Mapping>, StoreError>;

    fn fetch_rule(&self, id: &str) -> Result<Option<Rule>, StoreError>;

    fn rule_exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.fetch_rule(id)?.is_some())
    }
}

pub trait RecordStore {
    fn fetch_record(&self, id: &str) -> Result<Option<Artifact>, StoreError>;
}
