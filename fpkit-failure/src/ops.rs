//! Operation adapters
//!
//! A "throwing" operation is a closure that reports failure by returning
//! `Err`. Any error convertible into `anyhow::Error` is accepted, so std
//! errors, `anyhow` errors and failures themselves all fit. Panics are not
//! failures and are never caught.

use crate::messages::{self, is_blank};
use crate::Failure;

/// A zero-argument operation with no result that may fail
pub trait ThrowingRunnable {
    type Error: Into<anyhow::Error>;

    fn run(self) -> Result<(), Self::Error>;
}

impl<F, E> ThrowingRunnable for F
where
    F: FnOnce() -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    type Error = E;

    fn run(self) -> Result<(), E> {
        self()
    }
}

/// A zero-argument operation producing a `T` that may fail
pub trait ThrowingSupplier<T> {
    type Error: Into<anyhow::Error>;

    fn get(self) -> Result<T, Self::Error>;
}

impl<F, T, E> ThrowingSupplier<T> for F
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    type Error = E;

    fn get(self) -> Result<T, E> {
        self()
    }
}

impl Failure {
    /// Run an operation and capture how it ended.
    ///
    /// Returns the empty failure on success; otherwise the error wrapped in a
    /// failure (see [`Failure::from_error`]).
    ///
    /// ```rust
    /// use fpkit_failure::Failure;
    ///
    /// let ok = Failure::of(|| Ok::<_, std::num::ParseIntError>(()));
    /// assert!(ok.is_empty());
    ///
    /// let failed = Failure::of(|| "x".parse::<u32>().map(drop));
    /// assert_eq!(failed.message(), "invalid digit found in string");
    /// ```
    pub fn of(operation: impl ThrowingRunnable) -> Failure {
        match operation.run() {
            Ok(()) => Failure::empty(),
            Err(error) => Failure::from_error(error, messages::RUNNABLE_FAILED),
        }
    }

    /// Convert a raised error into a failure.
    ///
    /// The failure's message is the error's own message when it has one and
    /// `fallback` otherwise; the error is kept as the cause.
    pub fn from_error<E>(error: E, fallback: &str) -> Failure
    where
        E: Into<anyhow::Error>,
    {
        let type_name = crate::failure::short_type_name::<E>();
        let error: anyhow::Error = error.into();

        let message = match error.downcast_ref::<Failure>() {
            Some(failure) => failure.message().into_owned(),
            None => error.to_string(),
        };
        let message = if is_blank(&message) {
            fallback.to_string()
        } else {
            message
        };

        let failure = Failure::wrap_foreign(message, type_name, error);
        tracing::debug!(
            kind = ?failure.kind(),
            cause = failure.cause().map_or("", |cause| cause.name()),
            message = %failure.message(),
            "converted raised error into failure"
        );
        failure
    }
}
