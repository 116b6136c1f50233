//! Safe-call wrappers: run a callback and turn any panic into a typed `Left`.
//!
//! A wrapper is the single boundary where a panic becomes a value. The
//! caught payload is normalized with [`safe_unknown_error`], then classified
//! by an [`ErrorPolicy`]:
//!
//! | policy | classification |
//! |---|---|
//! | [`AsUnknown`] | `UnknownError` built from the exception |
//! | [`Transform(f)`](Transform) | whatever `f(exception)` returns |
//!
//! The policy runs at most once, and only on the failure path. Nothing
//! above a wrapper ever has to catch anything: failures travel as `Left`.
//!
//! Wrappers rely on unwinding. Under `panic = "abort"` a panic terminates
//! the process before it can be classified. The panic hook still runs, so
//! the default hook's message is printed even for panics that end up as a
//! `Left`.
//!
//! # Examples
//!
//! ```rust
//! use foundation_types::control::Either;
//! use foundation_types::error::{AsUnknown, Transform, TypedError, UnknownError, run_catching};
//!
//! let ok: Either<UnknownError, i32> = run_catching(|| 2 + 2, AsUnknown);
//! assert_eq!(ok, Either::Right(4));
//!
//! let failed: Either<TypedError, i32> = run_catching(
//!     || panic!("division by zero"),
//!     Transform::new(|exception| TypedError::new("math-error", exception.message())),
//! );
//! assert!(failed.left().is_some_and(|error| error.is("math-error")));
//! ```

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::{Exception, TypedError, UnknownError, safe_unknown_error};
use crate::control::Either;

/// Decides which typed error a caught [`Exception`] becomes.
///
/// Implementations must not panic; a panicking policy escapes the wrapper.
pub trait ErrorPolicy<L> {
    /// Classifies the normalized exception.
    fn classify(self, exception: Exception) -> L;
}

/// The default policy: every failure is an [`UnknownError`].
///
/// Works for any left type that can be built from an `UnknownError`,
/// including [`TypedError`] itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AsUnknown;

impl<L: From<UnknownError>> ErrorPolicy<L> for AsUnknown {
    fn classify(self, exception: Exception) -> L {
        L::from(UnknownError::from_exception(&exception))
    }
}

/// Delegates classification to a caller-supplied function.
///
/// Prefer [`Transform::new`] with closures: it pins the argument type to
/// [`Exception`] so the closure needs no annotation.
#[derive(Debug, Clone, Copy)]
pub struct Transform<F>(pub F);

impl<F> Transform<F> {
    /// Wraps a classification function.
    pub const fn new<L>(function: F) -> Self
    where
        F: FnOnce(Exception) -> L,
    {
        Self(function)
    }
}

impl<L, F> ErrorPolicy<L> for Transform<F>
where
    F: FnOnce(Exception) -> L,
{
    fn classify(self, exception: Exception) -> L {
        (self.0)(exception)
    }
}

/// Normalizes a caught payload and hands it to the policy.
pub(crate) fn settle<L, P>(payload: Box<dyn Any + Send>, policy: P) -> L
where
    P: ErrorPolicy<L>,
{
    let exception = safe_unknown_error(payload);
    tracing::debug!(
        name = exception.name(),
        message = exception.message(),
        "safe call caught a panic"
    );
    policy.classify(exception)
}

/// Runs a callback that already returns an `Either`, catching panics.
///
/// A normal return is passed through unchanged. A panic is classified by
/// `policy` and returned as `Left`.
///
/// # Examples
///
/// ```rust
/// use foundation_types::control::Either;
/// use foundation_types::error::{AsUnknown, UnknownError, is_unknown_error, safe_throw_call};
///
/// let passed: Either<UnknownError, i32> = safe_throw_call(|| Either::Right(4), AsUnknown);
/// assert_eq!(passed, Either::Right(4));
///
/// let caught: Either<UnknownError, i32> = safe_throw_call(|| panic!("boom"), AsUnknown);
/// assert!(caught.fold(|error| is_unknown_error(&error), |_| false));
/// ```
pub fn safe_throw_call<L, R, C, P>(call: C, policy: P) -> Either<L, R>
where
    L: Into<TypedError>,
    C: FnOnce() -> Either<L, R>,
    P: ErrorPolicy<L>,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(outcome) => outcome,
        Err(payload) => Either::Left(settle(payload, policy)),
    }
}

/// Runs a callback returning a plain value, wrapping it in `Right`.
///
/// Same failure behavior as [`safe_throw_call`].
pub fn run_catching<L, O, C, P>(call: C, policy: P) -> Either<L, O>
where
    L: Into<TypedError>,
    C: FnOnce() -> O,
    P: ErrorPolicy<L>,
{
    safe_throw_call(move || Either::Right(call()), policy)
}
