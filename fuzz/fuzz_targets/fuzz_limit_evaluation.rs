//! Fuzz target for limit evaluation.
//!
//! Any resolved value checked against any limit must produce violations, not panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_limit_evaluation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use artifactflow_domain::evaluate_limit;
use artifactflow_types::{Limit, LimitKind, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    found_json: String,
    kind: String,
    limit_json: String,
}

fuzz_target!(|input: Input| {
    let Ok(found) = serde_json::from_str::<Value>(&input.found_json) else {
        return;
    };
    let Ok(limit_value) = serde_json::from_str::<Value>(&input.limit_json) else {
        return;
    };
    let limit = Limit::new(LimitKind::parse(&input.kind), limit_value);
    let _ = evaluate_limit(&found, &limit);
});
