//! Validated constructors for failures
//!
//! Every way of building a generic failure goes through here, so the
//! blank-message rule is checked in exactly one place.

use crate::messages::{self, is_blank};
use crate::{Failure, Result};

/// The empty failure
pub fn empty() -> Failure {
    Failure::empty()
}

/// Create a leaf failure; blank messages are rejected with `IllegalArgument`
pub fn with(message: impl Into<String>) -> Result<Failure> {
    Failure::with(message)
}

/// Wrap a failure; a blank message falls back to the cause's message
pub fn wrap(message: impl Into<String>, failure: Failure) -> Failure {
    Failure::wrap(message, failure)
}

/// Wrap a foreign error; a blank message falls back to the error's message
pub fn wrap_error<E>(message: impl Into<String>, error: E) -> Failure
where
    E: Into<anyhow::Error>,
{
    Failure::wrap_error(message, error)
}

pub(crate) fn ensure_message(message: String) -> Result<String> {
    if is_blank(&message) {
        return Err(Failure::illegal_argument(messages::BLANK_MESSAGE));
    }
    Ok(message)
}
