//! Control structures for failure-as-value programming.
//!
//! - [`Either`]: A value that is one of two types (`Left` failure, `Right` success)
//! - [`Lazy`]: Deferred evaluation with in-place memoization
//! - [`AsyncLazy`]: The same, for callbacks that produce a future
//! - [`present`] / [`empty`]: Presence predicates over `Option`
//!
//! # Examples
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use foundation_types::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_computed());
//!
//! assert_eq!(*lazy.compute(), 42);
//! assert!(lazy.is_computed());
//! ```
//!
//! ## Branching Without Panics
//!
//! ```rust
//! use foundation_types::control::Either;
//!
//! let parsed: Either<String, i32> = "12".parse::<i32>().map_err(|e| e.to_string()).into();
//! assert_eq!(parsed.map_right(|n| n + 1), Either::Right(13));
//! ```

mod async_lazy;
mod either;
mod lazy;
mod option;

pub use async_lazy::AsyncLazy;
pub use either::Either;
pub use lazy::{Lazy, LazyPoisonedError, LazyState};
pub use option::{empty, present};
