//! Fuzz target for snapshot decoding.
//!
//! Goal: loading a snapshot should **never panic** on any input.
//! Malformed JSON and dangling mappings must surface as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_snapshot_loader
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = artifactflow_store::fuzz::load_snapshot_str(text);
    }
});
