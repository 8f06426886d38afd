//! Fuzz target for key path parsing and resolution.
//!
//! The metadata tree comes from JSON in the input; the key path is derived from
//! arbitrary bytes. Neither parsing nor resolution may panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_path_resolution
//! ```

#![no_main]

use arbitrary::Arbitrary;
use artifactflow_domain::{KeyPath, resolve};
use artifactflow_types::{Artifact, Value};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

#[derive(Arbitrary, Debug)]
struct Input {
    path: String,
    metadata_json: String,
    name: String,
    artifact_type: String,
}

fuzz_target!(|input: Input| {
    let metadata: BTreeMap<String, Value> =
        serde_json::from_str(&input.metadata_json).unwrap_or_default();
    let artifact = Artifact {
        name: input.name,
        artifact_type: input.artifact_type,
        artifact_metadata: metadata,
        ..Artifact::default()
    };

    if let Ok(path) = KeyPath::parse(&input.path) {
        let _ = resolve(&artifact, &path);
    }
});
