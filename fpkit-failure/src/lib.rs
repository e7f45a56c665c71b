//! # fpkit-failure
//!
//! Failures as plain values: the error half of fpkit's `Outcome<T>`.
//!
//! ## Design Philosophy
//!
//! - **Failure**: An immutable value, never thrown; either empty or present
//! - **FailureKind**: Know what category of failure occurred (e.g. EntityNotFound)
//! - **Cause chain**: Wrap lower-level failures or foreign errors without losing them
//! - **Resolved message**: Own message, else the cause's, else a fixed fallback
//!
//! ## Usage
//!
//! ```rust
//! use fpkit_failure::{Failure, FailureKind};
//!
//! fn load_user(id: u64) -> fpkit_failure::Result<String> {
//!     if id == 0 {
//!         return Err(Failure::illegal_argument("user id must be positive"));
//!     }
//!     Err(Failure::entity_not_found(format!("user {} not found", id)))
//! }
//!
//! let failure = load_user(7).unwrap_err();
//! assert!(failure.is_kind(FailureKind::EntityNotFound));
//!
//! let wrapped = Failure::wrap("", failure);
//! assert_eq!(wrapped.message(), "user 7 not found");
//! ```
//!
//! ## Principles
//!
//! - Leaf failures built with `Failure::with` must carry a message
//! - External errors enter through `wrap_error` or the operation adapters,
//!   never through an implicit `From` conversion
//! - Render with `message()`, not the raw own message: it may be blank

mod failure;
mod kind;

pub mod factory;
pub mod messages;
pub mod ops;

pub use failure::{Cause, Failure};
pub use kind::{FailureKind, Reasons};
pub use ops::{ThrowingRunnable, ThrowingSupplier};

/// Result type alias using fpkit Failure
pub type Result<T> = std::result::Result<T, Failure>;
