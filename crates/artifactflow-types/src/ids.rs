//! Stable violation codes.
//!
//! `code` is a short snake_case discriminator carried by every violation.

// Path resolution
pub const CODE_KEY_NOT_FOUND: &str = "key_not_found";

// Comparisons
pub const CODE_BELOW_MINIMUM: &str = "below_minimum";
pub const CODE_ABOVE_MAXIMUM: &str = "above_maximum";
pub const CODE_NOT_EQUAL: &str = "not_equal";
pub const CODE_NOT_IN_SET: &str = "not_in_set";

// Limit/value consistency
pub const CODE_UNSUPPORTED_LIMIT_TYPE: &str = "unsupported_limit_type";
pub const CODE_UNSUPPORTED_VALUE_TYPE: &str = "unsupported_value_type";
pub const CODE_UNSUPPORTED_LIMIT_VALUE: &str = "unsupported_limit_value";
pub const CODE_TYPE_MISMATCH: &str = "type_mismatch";
pub const CODE_NO_LIMITS: &str = "no_limits";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
