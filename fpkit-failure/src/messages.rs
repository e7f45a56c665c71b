//! Fixed fallback messages
//!
//! These are the strings a failure resolves to when neither it nor its cause
//! carries usable text. They are public so callers can match on them.

/// Rendered message of the empty failure
pub const NO_FAILURE: &str = "no failure";

/// Last step of message resolution when nothing in the chain has text
pub const UNKNOWN_FAILURE: &str = "unknown failure occurred";

/// Message of a wrapped failure when neither the caller nor the cause had one
pub const UNEXPECTED: &str = "An unexpected error occurred.";

/// Fallback when a runnable returns an error without a message
pub const RUNNABLE_FAILED: &str = "An unexpected error occurred during runnable execution.";

/// Fallback when a supplier returns an error without a message
pub const SUPPLIER_FAILED: &str = "An unexpected error occurred during supplier execution.";

/// Fallback when a mapping closure returns an error without a message
pub const MAPPING_FAILED: &str = "An error occurred during mapping.";

/// Fallback when a flat-mapping closure returns an error without a message
pub const FLAT_MAPPING_FAILED: &str = "An error occurred during flatMapping.";

/// Reported by `Failure::with` for a blank message
pub const BLANK_MESSAGE: &str = "failure message cannot be blank when created directly";

/// A message is blank when it has no non-whitespace characters.
pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}
