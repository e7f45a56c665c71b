//! fpkit error types
//!
//! Re-exports fpkit-failure so users of `Outcome` need a single dependency.

pub use fpkit_failure::{
    factory, messages, ops, Cause, Failure, FailureKind, Reasons, Result, ThrowingRunnable,
    ThrowingSupplier,
};
