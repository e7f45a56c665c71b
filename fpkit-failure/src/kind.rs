//! Failure kinds and their constructors

use crate::Failure;
use std::collections::BTreeMap;
use std::fmt;

/// Field name -> ordered violation reasons, carried by `InvalidRequest`.
pub type Reasons = BTreeMap<String, Vec<String>>;

/// The kind of failure that occurred.
///
/// The kind is the failure's category tag. Match on it (or use
/// [`Failure::is_kind`]) to decide how to handle a specific case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FailureKind {
    /// Uncategorized failure - what `with`, `wrap` and the adapters produce
    Failure,

    /// A precondition or contract was violated
    IllegalArgument,

    /// The requested entity does not exist
    EntityNotFound,

    /// The entity exists but failed semantic validation
    EntityValidationFailed,

    /// The request was malformed; may carry per-field reasons
    InvalidRequest,

    /// The operation is forbidden in the current state
    OperationNotAllowed,

    /// Application-defined kind, identified by name
    Custom(&'static str),
}

impl FailureKind {
    /// Returns the failure kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Failure => "Failure",
            FailureKind::IllegalArgument => "IllegalArgument",
            FailureKind::EntityNotFound => "EntityNotFound",
            FailureKind::EntityValidationFailed => "EntityValidationFailed",
            FailureKind::InvalidRequest => "InvalidRequest",
            FailureKind::OperationNotAllowed => "OperationNotAllowed",
            FailureKind::Custom(name) => *name,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Kind constructors
// =============================================================================

impl Failure {
    /// Create a failure of any kind.
    ///
    /// Unlike [`Failure::with`] this does not reject a blank message; such a
    /// failure resolves to the fallback message when read.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::from_parts(kind, Some(message.into()), None, None)
    }

    /// Create an IllegalArgument failure
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(FailureKind::IllegalArgument, message)
    }

    /// Create an EntityNotFound failure
    pub fn entity_not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::EntityNotFound, message)
    }

    /// Create an EntityValidationFailed failure
    pub fn entity_validation_failed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::EntityValidationFailed, message)
    }

    /// Create an OperationNotAllowed failure
    pub fn operation_not_allowed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::OperationNotAllowed, message)
    }

    /// Create an InvalidRequest failure with a plain message and no reasons
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidRequest, message)
    }

    /// Create an InvalidRequest failure for a single field.
    ///
    /// The message is derived from the field and reason; the pair is also kept
    /// in [`Failure::reasons`].
    pub fn invalid_request_reason(key: impl Into<String>, reason: impl Into<String>) -> Self {
        let key = key.into();
        let reason = reason.into();
        let message = format!("Invalid request for key {} with reasons {}", key, reason);

        let mut reasons = Reasons::new();
        reasons.insert(key, vec![reason]);
        Self::from_parts(FailureKind::InvalidRequest, Some(message), Some(reasons), None)
    }

    /// Create an InvalidRequest failure from a full reasons mapping.
    ///
    /// The message is derived from the mapping, which is kept unchanged in
    /// [`Failure::reasons`].
    ///
    /// ```rust
    /// use fpkit_failure::{Failure, Reasons};
    ///
    /// let mut reasons = Reasons::new();
    /// reasons.insert("email".into(), vec!["missing".into()]);
    /// reasons.insert("age".into(), vec!["negative".into(), "not a number".into()]);
    ///
    /// let failure = Failure::invalid_request_reasons(reasons.clone());
    /// assert_eq!(
    ///     failure.message(),
    ///     "Invalid request with reasons {age=[negative, not a number], email=[missing]}"
    /// );
    /// assert_eq!(failure.reasons(), Some(&reasons));
    /// ```
    pub fn invalid_request_reasons(reasons: Reasons) -> Self {
        let message = format!("Invalid request with reasons {}", render_reasons(&reasons));
        Self::from_parts(FailureKind::InvalidRequest, Some(message), Some(reasons), None)
    }
}

/// `{field=[reason, reason], other=[reason]}`
fn render_reasons(reasons: &Reasons) -> String {
    let fields: Vec<String> = reasons
        .iter()
        .map(|(field, field_reasons)| format!("{}=[{}]", field, field_reasons.join(", ")))
        .collect();
    format!("{{{}}}", fields.join(", "))
}
