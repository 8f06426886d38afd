//! Storage adapters: an in-memory rule/record store and the JSON snapshot loader.
//!
//! This crate is allowed to do filesystem IO. The engine only sees it through the
//! `RuleStore` and `RecordStore` traits.

#![forbid(unsafe_code)]

mod memory;
mod snapshot;

use anyhow::Context;
use camino::Utf8Path;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

/// Fuzz-friendly API for testing snapshot decoding without filesystem access.
pub mod fuzz {
    use super::*;

    /// Decode arbitrary text as a snapshot and build a store from it.
    ///
    /// Returns `Err(...)` on malformed JSON or dangling mappings. **Never panics** on any input.
    pub fn load_snapshot_str(text: &str) -> anyhow::Result<()> {
        let _ = from_snapshot_str(text)?;
        Ok(())
    }
}

/// Build a store from snapshot JSON text.
pub fn from_snapshot_str(text: &str) -> anyhow::Result<MemoryStore> {
    let snapshot: Snapshot = serde_json::from_str(text).context("parse snapshot JSON")?;
    MemoryStore::from_snapshot(snapshot)
}

/// Read a snapshot file (`{ "artifacts": [...], "rules": [...], "mappings": [...] }`).
pub fn load_snapshot(path: &Utf8Path) -> anyhow::Result<MemoryStore> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let store = from_snapshot_str(&text).with_context(|| format!("load snapshot {}", path))?;
    tracing::info!(
        target: "artifactflow::store",
        path = %path,
        artifacts = store.artifact_count(),
        rules = store.rule_count(),
        mappings = store.mapping_count(),
        "snapshot loaded"
    );
    Ok(store)
}
