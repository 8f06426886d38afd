use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("artifact not found: {0}")]
    RecordNotFound(String),

    /// A mapping points at a rule that no longer exists.
    #[error("mapping {mapping_id} references missing rule {rule_id}")]
    DanglingRule { mapping_id: String, rule_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
