//! # foundation-types
//!
//! Small functional building blocks for code that would rather return
//! failures than throw them.
//!
//! ## Overview
//!
//! - **Either**: a two-variant sum type, `Left` for failure and `Right` for success
//! - **Option predicates**: `present` / `empty` over `std::option::Option`
//! - **Lazy / `AsyncLazy`**: values computed on first demand and memoized in place
//! - **Typed errors**: tag-discriminated [`TypedError`](error::TypedError) records
//!   and variants pinned to a single tag (`UnknownError`, `ReadError`, `WriteError`)
//! - **Safe calls**: wrappers that run a callback, catch any panic, classify it
//!   as a typed error and hand the outcome back as an `Either`
//!
//! ## Feature Flags
//!
//! - `control`: `Either`, `Lazy`, `AsyncLazy`, option predicates
//! - `error`: typed errors and the synchronous safe-call wrappers
//! - `async`: asynchronous safe-call wrappers and timeout-bounded calls
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use foundation_types::prelude::*;
//!
//! fn divide(x: f64, y: f64) -> Either<&'static str, f64> {
//!     if y == 0.0 {
//!         return Either::Left("cannot divide number by 0!");
//!     }
//!     Either::Right(x / y)
//! }
//!
//! let message = divide(2.0, 0.0).fold(
//!     |error| format!("error: {error}"),
//!     |quotient| format!("division = {quotient}"),
//! );
//! assert_eq!(message, "error: cannot divide number by 0!");
//!
//! let parsed: Either<UnknownError, i32> =
//!     run_catching(|| "42".parse::<i32>().expect("not a number"), AsUnknown);
//! assert_eq!(parsed, Either::Right(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use foundation_types::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "error")]
    pub use crate::error::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "error")]
pub mod error;

#[doc(hidden)]
pub use paste;
