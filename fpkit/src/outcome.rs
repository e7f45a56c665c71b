//! # Outcome
//!
//! `Outcome<T>` holds exactly one of a produced value or a present
//! [`Failure`]. It is never mutated: every combinator consumes the outcome
//! and produces a new one, and a failed outcome short-circuits without
//! calling the supplied closure.

use crate::error::{messages, Failure, FailureKind, ThrowingSupplier};
use std::fmt;

const EMPTY_FAILED_OUTCOME: &str =
    "cannot create a failed Outcome from an empty Failure; use Outcome::ok instead";
const FAILURE_OF_OK: &str = "cannot get the failure of a successful Outcome";
const NO_VALUE: &str = "No value present, Outcome is in a failure state";

/// Success value or failure
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    state: State<T>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Ok(T),
    Failed(Failure),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A successful outcome
    pub fn ok(value: T) -> Self {
        Self {
            state: State::Ok(value),
        }
    }

    /// A failed outcome.
    ///
    /// # Panics
    ///
    /// Panics if `failure` is the empty failure. A failed outcome with nothing
    /// in it is a bug at the call site, not something to coerce into success.
    pub fn failure(failure: Failure) -> Self {
        if failure.is_empty() {
            panic!("{}", EMPTY_FAILED_OUTCOME);
        }
        Self::failed(failure)
    }

    /// A failed outcome with a leaf failure built from `message`.
    ///
    /// # Panics
    ///
    /// Panics if `message` is blank, like [`Outcome::failure`] with the empty
    /// failure. Use [`Outcome::try_failure_msg`] to get the rejection instead.
    pub fn failure_msg(message: impl Into<String>) -> Self {
        match Self::try_failure_msg(message) {
            Ok(outcome) => outcome,
            Err(rejected) => panic!("{}", rejected),
        }
    }

    /// A failed outcome with a leaf failure built from `message`.
    ///
    /// # Errors
    ///
    /// Returns the `IllegalArgument` failure from [`Failure::with`] if
    /// `message` is blank.
    pub fn try_failure_msg(message: impl Into<String>) -> Result<Self, Failure> {
        Failure::with(message).map(Self::failed)
    }

    /// Run a supplier and capture its outcome.
    ///
    /// An error returned by the supplier becomes the failure, keeping the
    /// error as cause.
    pub fn of(supplier: impl ThrowingSupplier<T>) -> Self {
        match supplier.get() {
            Ok(value) => Self::ok(value),
            Err(error) => Self::failed(Failure::from_error(error, messages::SUPPLIER_FAILED)),
        }
    }

    fn failed(failure: Failure) -> Self {
        debug_assert!(failure.is_present(), "failed outcome without a failure");
        Self {
            state: State::Failed(failure),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Check if the outcome holds a value
    pub fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    /// Check if the outcome holds a failure
    pub fn is_failure(&self) -> bool {
        !self.is_ok()
    }

    /// True iff the outcome failed with the given kind
    pub fn is_failure_kind(&self, kind: FailureKind) -> bool {
        self.as_failure().is_some_and(|failure| failure.is_kind(kind))
    }

    /// The failure of a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics on a successful outcome; check [`Outcome::is_failure`] first or
    /// use [`Outcome::as_failure`].
    pub fn get_failure(&self) -> &Failure {
        match &self.state {
            State::Failed(failure) => failure,
            State::Ok(_) => panic!("{}", FAILURE_OF_OK),
        }
    }

    /// Get the failure, if any
    pub fn as_failure(&self) -> Option<&Failure> {
        match &self.state {
            State::Failed(failure) => Some(failure),
            State::Ok(_) => None,
        }
    }

    /// Get the value, if any
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Ok(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// The value, or a failure whose message is prefixed with `message`.
    ///
    /// The original failure is kept as the cause of the returned one.
    pub fn try_expect(self, message: &str) -> Result<T, Failure> {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Failed(failure) => {
                let prefixed = format!("{}: {}", message, failure.message());
                Err(Failure::wrap(prefixed, failure))
            }
        }
    }

    /// The value.
    ///
    /// # Panics
    ///
    /// Panics on a failed outcome with the failure from
    /// [`Outcome::try_expect`].
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(failure) => panic!("{}", failure),
        }
    }

    /// The value.
    ///
    /// # Panics
    ///
    /// Panics on a failed outcome, like [`Outcome::expect`] with a generic
    /// message.
    pub fn get(self) -> T {
        self.expect(NO_VALUE)
    }

    /// The value, or `default` on failure
    pub fn or_else(self, default: T) -> T {
        match self.state {
            State::Ok(value) => value,
            State::Failed(_) => default,
        }
    }

    /// The value, or the supplier's result on failure
    pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
        match self.state {
            State::Ok(value) => value,
            State::Failed(_) => supplier(),
        }
    }

    /// Surface the stored failure as `Err`, ready for `?`
    pub fn or_else_throw(self) -> Result<T, Failure> {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Failed(failure) => Err(failure),
        }
    }

    /// Like [`Outcome::or_else_throw`], with a caller-chosen error
    pub fn or_else_throw_with<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Failed(_) => Err(error()),
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Run `action` on the value, if any
    pub fn if_ok(&self, action: impl FnOnce(&T)) {
        if let State::Ok(value) = &self.state {
            action(value);
        }
    }

    /// Run `action` on the failure, if any
    pub fn if_failure(&self, action: impl FnOnce(&Failure)) {
        if let State::Failed(failure) = &self.state {
            action(failure);
        }
    }

    /// [`Outcome::if_ok`], returning `self` for chaining
    pub fn inspect_ok(self, action: impl FnOnce(&T)) -> Self {
        self.if_ok(action);
        self
    }

    /// [`Outcome::if_failure`], returning `self` for chaining
    pub fn inspect_failure(self, action: impl FnOnce(&Failure)) -> Self {
        self.if_failure(action);
        self
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Apply `mapper` to the value; a failure passes through
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.state {
            State::Ok(value) => Outcome::ok(mapper(value)),
            State::Failed(failure) => short_circuit(failure, "map"),
        }
    }

    /// Map with a closure that may fail; its error becomes the failure.
    ///
    /// ```rust
    /// use fpkit::Outcome;
    ///
    /// let port = Outcome::ok("8080").try_map(|s| s.parse::<u16>());
    /// assert_eq!(port.get(), 8080);
    ///
    /// let port = Outcome::ok("http").try_map(|s| s.parse::<u16>());
    /// assert_eq!(port.get_failure().message(), "invalid digit found in string");
    /// ```
    pub fn try_map<U, E>(self, mapper: impl FnOnce(T) -> Result<U, E>) -> Outcome<U>
    where
        E: Into<anyhow::Error>,
    {
        match self.state {
            State::Ok(value) => match mapper(value) {
                Ok(mapped) => Outcome::ok(mapped),
                Err(error) => Outcome::failed(Failure::from_error(error, messages::MAPPING_FAILED)),
            },
            State::Failed(failure) => short_circuit(failure, "try_map"),
        }
    }

    /// Chain an outcome-producing step; a failure passes through
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self.state {
            State::Ok(value) => mapper(value),
            State::Failed(failure) => short_circuit(failure, "flat_map"),
        }
    }

    /// Flat-map with a closure that may also fail outright.
    ///
    /// A failed outcome returned by the closure is passed through as is; an
    /// `Err` becomes a new failure.
    pub fn try_flat_map<U, E>(self, mapper: impl FnOnce(T) -> Result<Outcome<U>, E>) -> Outcome<U>
    where
        E: Into<anyhow::Error>,
    {
        match self.state {
            State::Ok(value) => match mapper(value) {
                Ok(outcome) => outcome,
                Err(error) => {
                    Outcome::failed(Failure::from_error(error, messages::FLAT_MAPPING_FAILED))
                }
            },
            State::Failed(failure) => short_circuit(failure, "try_flat_map"),
        }
    }
}

fn short_circuit<U>(failure: Failure, combinator: &'static str) -> Outcome<U> {
    tracing::trace!(combinator, kind = ?failure.kind(), "outcome already failed, skipping");
    Outcome::failed(failure)
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.or_else_throw()
    }
}

/// # Panics
///
/// Panics on `Err` holding the empty failure, like [`Outcome::failure`].
impl<T> From<Result<T, Failure>> for Outcome<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(failure) => Outcome::failure(failure),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => write!(f, "Ok({})", value),
            State::Failed(failure) => write!(f, "Failed({})", failure),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            State::Failed(failure) => f.debug_tuple("Failed").field(failure).finish(),
        }
    }
}
