//! Pure artifact validation (no IO).
//!
//! Input: an artifact and the rules active for an environment, fetched through the
//! storage traits in [`store`].
//! Output: pass/fail plus every violation, keyed by rule id.

#![forbid(unsafe_code)]

pub mod environment;
pub mod error;
pub mod limit;
pub mod path;
pub mod policy;
pub mod report;
pub mod store;

mod engine;
mod service;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, validate};
pub use environment::{ActiveRule, active_rules_for, is_active_for};
pub use error::EngineError;
pub use limit::evaluate_limit;
pub use path::{KeyPath, PathParseError, resolve};
pub use service::{RecordValidation, validate_record_for_environment};
