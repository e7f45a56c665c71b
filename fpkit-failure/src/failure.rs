//! The main Failure type for fpkit

use crate::messages::{self, is_blank};
use crate::{factory, FailureKind, Reasons, Result};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable failure value.
///
/// A failure is either *empty* (no failure at all, see [`Failure::empty`]) or
/// *present*. A present failure carries:
/// - `kind`: What category of failure this is
/// - `message`: Its own message (may be blank when a cause supplies one)
/// - `reasons`: Field-level violation reasons (`InvalidRequest` only)
/// - `cause`: The failure or foreign error it wraps (if any)
///
/// # Example
///
/// ```rust
/// use fpkit_failure::{Failure, FailureKind};
///
/// let missing = Failure::entity_not_found("user 42 not found");
/// let failure = Failure::wrap("", missing.clone());
///
/// assert_eq!(failure.message(), "user 42 not found");
/// assert_eq!(failure.unwrap_cause(), &missing);
/// assert!(missing.is_kind(FailureKind::EntityNotFound));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    repr: Option<Box<Inner>>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct Inner {
    kind: FailureKind,
    message: Option<String>,
    reasons: Option<Reasons>,
    cause: Option<Cause>,
}

/// What a failure wraps.
#[derive(Clone)]
pub enum Cause {
    /// Another failure; the chain can be walked through it
    Failure(Failure),

    /// Any other error, kept behind an `Arc` so failures stay cheap to clone
    Foreign {
        /// Short type name of the error as it was raised (e.g. `ParseIntError`)
        type_name: &'static str,
        error: Arc<anyhow::Error>,
    },
}

impl Failure {
    /// The empty failure: "no failure happened".
    ///
    /// Every call returns an equal value, and no other failure is ever equal
    /// to it.
    pub const fn empty() -> Self {
        Self { repr: None }
    }

    pub(crate) fn from_parts(
        kind: FailureKind,
        message: Option<String>,
        reasons: Option<Reasons>,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            repr: Some(Box::new(Inner {
                kind,
                message,
                reasons,
                cause,
            })),
        }
    }

    /// Create a leaf failure.
    ///
    /// Fails with an `IllegalArgument` failure if `message` is blank: a
    /// failure built directly must say something.
    pub fn with(message: impl Into<String>) -> Result<Self> {
        let message = factory::ensure_message(message.into())?;
        Ok(Self::from_parts(FailureKind::Failure, Some(message), None, None))
    }

    /// Wrap another failure.
    ///
    /// A blank `message` is replaced by the cause's resolved message. Wrapping
    /// the empty failure records no cause.
    pub fn wrap(message: impl Into<String>, cause: Failure) -> Self {
        let cause = cause.repr.is_some().then_some(Cause::Failure(cause));
        Self::chained(message.into(), cause)
    }

    /// Wrap any lower-level error.
    ///
    /// If the error is itself a [`Failure`] (e.g. one that travelled through
    /// `anyhow`), it is recorded as a failure cause so [`Failure::unwrap_cause`]
    /// still reaches it.
    pub fn wrap_error<E>(message: impl Into<String>, error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let type_name = short_type_name::<E>();
        Self::wrap_foreign(message.into(), type_name, error.into())
    }

    pub(crate) fn wrap_foreign(
        message: String,
        type_name: &'static str,
        error: anyhow::Error,
    ) -> Self {
        match error.downcast::<Failure>() {
            Ok(failure) => Self::wrap(message, failure),
            Err(error) => Self::chained(
                message,
                Some(Cause::Foreign {
                    type_name,
                    error: Arc::new(error),
                }),
            ),
        }
    }

    fn chained(message: String, cause: Option<Cause>) -> Self {
        let message = if is_blank(&message) {
            cause
                .as_ref()
                .map(Cause::message)
                .filter(|m| !is_blank(m))
                .map(Cow::into_owned)
                .unwrap_or_else(|| messages::UNEXPECTED.to_string())
        } else {
            message
        };
        Self::from_parts(FailureKind::Failure, Some(message), None, cause)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Resolved message.
    ///
    /// Own non-blank message first, then the cause's non-blank message, then
    /// [`messages::UNKNOWN_FAILURE`]. Recomputed on every call.
    pub fn message(&self) -> Cow<'_, str> {
        let Some(inner) = &self.repr else {
            return Cow::Borrowed(messages::NO_FAILURE);
        };

        if let Some(own) = inner.message.as_deref().filter(|m| !is_blank(m)) {
            return Cow::Borrowed(own);
        }

        if let Some(cause) = &inner.cause {
            let message = cause.message();
            if !is_blank(&message) {
                return message;
            }
        }

        Cow::Borrowed(messages::UNKNOWN_FAILURE)
    }

    /// The failure's own message, before resolution
    pub fn own_message(&self) -> Option<&str> {
        self.repr.as_ref()?.message.as_deref()
    }

    /// Kind of a present failure; `None` for the empty failure
    pub fn kind(&self) -> Option<FailureKind> {
        self.repr.as_ref().map(|inner| inner.kind)
    }

    /// Field-level reasons (only set for reason-carrying `InvalidRequest`s)
    pub fn reasons(&self) -> Option<&Reasons> {
        self.repr.as_ref()?.reasons.as_ref()
    }

    /// Raw cause, unresolved
    pub fn cause(&self) -> Option<&Cause> {
        self.repr.as_ref()?.cause.as_ref()
    }

    /// The wrapped failure, or `self` when the cause is absent or foreign.
    ///
    /// Never returns the empty failure for a present one, so a chain can be
    /// walked without a spurious "no failure" in the middle.
    pub fn unwrap_cause(&self) -> &Failure {
        match self.cause() {
            Some(Cause::Failure(failure)) => failure,
            _ => self,
        }
    }

    /// Iterate the failure chain, starting with `self`.
    ///
    /// Stops at the first foreign cause. Yields nothing for the empty failure.
    pub fn chain(&self) -> impl Iterator<Item = &Failure> {
        std::iter::successors(self.is_present().then_some(self), |&failure| {
            failure.cause().and_then(Cause::as_failure)
        })
    }

    // =========================================================================
    // Checks
    // =========================================================================

    /// Check if this is a real failure
    pub fn is_present(&self) -> bool {
        self.repr.is_some()
    }

    /// Check if this is the empty failure
    pub fn is_empty(&self) -> bool {
        self.repr.is_none()
    }

    /// True iff the failure is present and of the given kind
    pub fn is_kind(&self, kind: FailureKind) -> bool {
        self.kind() == Some(kind)
    }

    /// `Err(self)` if present, `Ok(())` for the empty failure.
    ///
    /// This is the bridge to `?`:
    ///
    /// ```rust
    /// use fpkit_failure::Failure;
    ///
    /// fn check(failure: Failure) -> fpkit_failure::Result<()> {
    ///     failure.into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(check(Failure::empty()).is_ok());
    /// assert!(check(Failure::illegal_argument("nope")).is_err());
    /// ```
    pub fn into_result(self) -> Result<()> {
        if self.is_present() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Cause
// =============================================================================

impl Cause {
    /// Resolved message of the cause (a foreign error's `Display` text)
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Cause::Failure(failure) => failure.message(),
            Cause::Foreign { error, .. } => Cow::Owned(error.to_string()),
        }
    }

    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Cause::Failure(failure) => Some(failure),
            Cause::Foreign { .. } => None,
        }
    }

    /// The foreign error, if this cause is not a failure
    pub fn as_foreign(&self) -> Option<&anyhow::Error> {
        match self {
            Cause::Failure(_) => None,
            Cause::Foreign { error, .. } => Some(&**error),
        }
    }

    /// Name used when rendering the cause: the failure kind or the error type
    pub fn name(&self) -> &'static str {
        match self {
            Cause::Failure(failure) => failure.kind().map_or("Failure", |kind| kind.as_str()),
            Cause::Foreign { type_name, .. } => *type_name,
        }
    }
}

// Foreign errors have no equality of their own; two causes are the same
// foreign error only if they share the allocation.
impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cause::Failure(a), Cause::Failure(b)) => a == b,
            (Cause::Foreign { error: a, .. }, Cause::Foreign { error: b, .. }) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Cause {}

impl Hash for Cause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cause::Failure(failure) => {
                0u8.hash(state);
                failure.hash(state);
            }
            Cause::Foreign { error, .. } => {
                1u8.hash(state);
                std::ptr::hash(Arc::as_ptr(error), state);
            }
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Failure(failure) => fmt::Debug::fmt(failure, f),
            Cause::Foreign { type_name, error } => write!(f, "{}: {:?}", type_name, error),
        }
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(inner) = &self.repr else {
            return f.write_str("Failure::EMPTY");
        };

        write!(f, "{}{{message='{}'", inner.kind, self.message())?;

        if let Some(cause) = &inner.cause {
            write!(f, ", cause={}", cause.name())?;
            let message = cause.message();
            if !is_blank(&message) {
                write!(f, "('{}')", message)?;
            }
        }

        f.write_str("}")
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(inner) = &self.repr else {
            return f.write_str("Failure::EMPTY");
        };

        writeln!(f, "{}", inner.kind)?;
        writeln!(f)?;
        writeln!(f, "    Message: {}", self.message())?;

        if let Some(reasons) = &inner.reasons {
            writeln!(f)?;
            writeln!(f, "    Reasons:")?;
            for (field, field_reasons) in reasons {
                writeln!(f, "        {}: {}", field, field_reasons.join(", "))?;
            }
        }

        if let Some(cause) = &inner.cause {
            writeln!(f)?;
            writeln!(f, "    Cause: {:?}", cause)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.cause()? {
            Cause::Failure(failure) => Some(failure as &(dyn std::error::Error + 'static)),
            Cause::Foreign { error, .. } => {
                let error: &(dyn std::error::Error + 'static) = &***error;
                Some(error)
            }
        }
    }
}

/// `core::num::error::ParseIntError` -> `ParseIntError`
pub(crate) fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn io_error(message: &str) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, message.to_string())
    }

    #[test]
    fn test_with_keeps_message() {
        let failure = Failure::with("disk full").unwrap();
        assert_eq!(failure.message(), "disk full");
        assert_eq!(failure.kind(), Some(FailureKind::Failure));
        assert!(failure.is_present());
        assert!(failure.cause().is_none());
    }

    #[test]
    fn test_with_rejects_blank() {
        for message in ["", "   ", "\n\t"] {
            let err = Failure::with(message).unwrap_err();
            assert!(err.is_kind(FailureKind::IllegalArgument));
            assert_eq!(err.message(), messages::BLANK_MESSAGE);
        }
    }

    #[test]
    fn test_empty() {
        let empty = Failure::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_present());
        assert_eq!(empty, Failure::empty());
        assert_eq!(empty.message(), messages::NO_FAILURE);
        assert_eq!(empty.kind(), None);
        assert!(!empty.is_kind(FailureKind::Failure));
        assert_eq!(Failure::default(), empty);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Failure::with("x").unwrap();
        let b = Failure::with("x").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Failure::with("y").unwrap());
        assert_ne!(a, Failure::illegal_argument("x"));
    }

    #[test]
    fn test_empty_never_equals_present() {
        let present = Failure::with("x").unwrap();
        assert_ne!(Failure::empty(), present);
        assert_ne!(present, Failure::empty());

        // The closest thing to an "empty-looking" present failure
        let blank = Failure::new(FailureKind::Failure, "");
        assert!(blank.is_present());
        assert_ne!(blank, Failure::empty());
    }

    #[test]
    fn test_wrap_falls_back_to_cause_message() {
        let cause = Failure::with("boom").unwrap();
        let failure = Failure::wrap("", cause.clone());
        assert_eq!(failure.message(), "boom");
        assert_eq!(failure.cause(), Some(&Cause::Failure(cause)));
    }

    #[test]
    fn test_wrap_keeps_own_message() {
        let failure = Failure::wrap("loading config", Failure::with("boom").unwrap());
        assert_eq!(failure.message(), "loading config");
        assert_eq!(failure.own_message(), Some("loading config"));
    }

    #[test]
    fn test_wrap_empty_cause() {
        let failure = Failure::wrap("   ", Failure::empty());
        assert!(failure.cause().is_none());
        assert_eq!(failure.message(), messages::UNEXPECTED);
    }

    #[test]
    fn test_wrap_error_foreign() {
        let failure = Failure::wrap_error("", io_error("connection reset"));
        assert_eq!(failure.message(), "connection reset");

        let cause = failure.cause().unwrap();
        assert_eq!(cause.name(), "Error");
        assert!(cause.as_failure().is_none());
        assert!(cause.as_foreign().is_some());
        assert_eq!(failure.unwrap_cause(), &failure);
    }

    #[test]
    fn test_display_omits_blank_cause_message() {
        let failure = Failure::wrap_error("m", io_error(""));
        assert_eq!(failure.to_string(), "Failure{message='m', cause=Error}");

        let failure = Failure::wrap_error("m", io_error("disk full"));
        assert_eq!(failure.to_string(), "Failure{message='m', cause=Error('disk full')}");
    }

    #[test]
    fn test_wrap_error_blank_foreign_message() {
        let failure = Failure::wrap_error(" ", io_error(""));
        assert_eq!(failure.message(), messages::UNEXPECTED);
    }

    #[test]
    fn test_wrap_error_recovers_failure() {
        let inner = Failure::entity_not_found("order 7");
        let failure = Failure::wrap_error("", anyhow::Error::new(inner.clone()));
        assert_eq!(failure.unwrap_cause(), &inner);
        assert_eq!(failure.message(), "order 7");
    }

    #[test]
    fn test_wrap_error_short_type_name() {
        let err = "x".parse::<i32>().unwrap_err();
        let failure = Failure::wrap_error("bad number", err);
        assert_eq!(failure.cause().unwrap().name(), "ParseIntError");
    }

    #[test]
    fn test_message_resolution_order() {
        // own blank -> cause
        let cause = Failure::with("root cause").unwrap();
        let failure = Failure::from_parts(
            FailureKind::Failure,
            Some("  ".into()),
            None,
            Some(Cause::Failure(cause)),
        );
        assert_eq!(failure.message(), "root cause");

        // own blank, no cause -> fallback
        let failure = Failure::new(FailureKind::OperationNotAllowed, "");
        assert_eq!(failure.message(), messages::UNKNOWN_FAILURE);

        // own blank, foreign blank -> fallback
        let failure = Failure::from_parts(
            FailureKind::Failure,
            None,
            None,
            Some(Cause::Foreign {
                type_name: "Error",
                error: Arc::new(anyhow::Error::new(io_error(""))),
            }),
        );
        assert_eq!(failure.message(), messages::UNKNOWN_FAILURE);
    }

    #[test]
    fn test_message_is_stable() {
        let failure = Failure::wrap("", Failure::with("boom").unwrap());
        assert_eq!(failure.message(), failure.message());
        assert_eq!(failure.message(), "boom");
    }

    #[test]
    fn test_unwrap_cause() {
        let leaf = Failure::with("leaf").unwrap();
        assert_eq!(leaf.unwrap_cause(), &leaf);

        let wrapped = Failure::wrap("outer", leaf.clone());
        assert_eq!(wrapped.unwrap_cause(), &leaf);
        assert!(wrapped.unwrap_cause().is_present());

        let empty = Failure::empty();
        assert!(empty.unwrap_cause().is_empty());
    }

    #[test]
    fn test_chain() {
        let leaf = Failure::illegal_argument("bad id");
        let middle = Failure::wrap("lookup failed", leaf);
        let outer = Failure::wrap("request failed", middle);

        let chain: Vec<_> = outer.chain().map(|f| f.message().into_owned()).collect();
        assert_eq!(chain, ["request failed", "lookup failed", "bad id"]);
        assert_eq!(Failure::empty().chain().count(), 0);
    }

    #[test]
    fn test_foreign_cause_identity() {
        let error = Arc::new(anyhow::anyhow!("shared"));
        let cause = Cause::Foreign {
            type_name: "Error",
            error: error.clone(),
        };
        let a = Failure::from_parts(FailureKind::Failure, Some("m".into()), None, Some(cause.clone()));
        let b = Failure::from_parts(FailureKind::Failure, Some("m".into()), None, Some(cause));
        assert_eq!(a, b);

        let c = Failure::wrap_error("m", anyhow::anyhow!("shared"));
        let d = Failure::wrap_error("m", anyhow::anyhow!("shared"));
        assert_ne!(c, d);
    }

    #[test]
    fn test_into_result() {
        assert!(Failure::empty().into_result().is_ok());
        let err = Failure::with("x").unwrap().into_result().unwrap_err();
        assert_eq!(err.message(), "x");
    }

    #[test]
    fn test_display() {
        assert_eq!(Failure::empty().to_string(), "Failure::EMPTY");

        let leaf = Failure::with("boom").unwrap();
        assert_eq!(leaf.to_string(), "Failure{message='boom'}");

        let wrapped = Failure::wrap("load", Failure::entity_not_found("user 1"));
        assert_eq!(
            wrapped.to_string(),
            "Failure{message='load', cause=EntityNotFound('user 1')}"
        );

        let foreign = Failure::wrap_error("parse", "x".parse::<u8>().unwrap_err());
        assert!(foreign.to_string().starts_with("Failure{message='parse', cause=ParseIntError('"));
    }

    #[test]
    fn test_debug() {
        let failure = Failure::wrap("outer", Failure::illegal_argument("inner"));
        let debug = format!("{:?}", failure);
        assert!(debug.contains("Message: outer"));
        assert!(debug.contains("Cause: IllegalArgument"));
        assert!(debug.contains("Message: inner"));
    }

    #[test]
    fn test_source() {
        let failure = Failure::wrap_error("outer", io_error("disk"));
        assert_eq!(failure.source().unwrap().to_string(), "disk");

        let failure = Failure::wrap("outer", Failure::with("inner").unwrap());
        let source = failure.source().unwrap();
        assert!(source.downcast_ref::<Failure>().is_some());

        assert!(Failure::with("leaf").unwrap().source().is_none());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Failure>();
    }
}
