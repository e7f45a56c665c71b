//! # fpkit
//!
//! Value-based error handling: an operation that may fail returns an
//! [`Outcome<T>`] instead of panicking or threading ad-hoc error types.
//!
//! ## Core Concepts
//! - **Outcome**: Exactly one of a value or a present failure
//! - **Failure**: Immutable failure value with a cause chain (from `fpkit-failure`)
//! - **FailureKind**: Category tag for matching (`EntityNotFound`, `InvalidRequest`, ...)
//! - **Adapters**: Closures returning `Result<_, E>` plug into `Outcome::of`
//!
//! ## Usage
//!
//! ```rust
//! use fpkit::{Failure, FailureKind, Outcome};
//!
//! fn find_price(sku: &str) -> Outcome<u32> {
//!     match sku {
//!         "apple" => Outcome::ok(120),
//!         _ => Outcome::failure(Failure::entity_not_found(format!("no price for {}", sku))),
//!     }
//! }
//!
//! let total = find_price("apple").map(|cents| cents * 3);
//! assert_eq!(total.get(), 360);
//!
//! let missing = find_price("pear").map(|cents| cents * 3);
//! assert!(missing.is_failure_kind(FailureKind::EntityNotFound));
//! assert_eq!(missing.get_failure().message(), "no price for pear");
//!
//! let parsed = Outcome::of(|| "12".parse::<u32>()).flat_map(|n| find_price("apple").map(|p| p * n));
//! assert_eq!(parsed.get(), 1440);
//! ```

pub mod error;
pub mod outcome;
pub mod pair;

pub use error::{Cause, Failure, FailureKind, Reasons, Result, ThrowingRunnable, ThrowingSupplier};
pub use outcome::Outcome;
pub use pair::Pair;
