//! Asynchronous safe-call wrappers.
//!
//! Same contract as the synchronous wrappers in [`call`](super::call): a
//! panic raised while invoking the callback or while polling its future is
//! normalized and classified exactly once, then returned as `Left`. The only
//! suspension point is the await on the callback's future.
//!
//! The `_within` variants race the callback against a timer. When the timer
//! wins, the callback's future is dropped and a [`TimeoutError`] is
//! classified through the same policy as a panic would be, as an
//! [`Exception`] named [`TimeoutError::EXCEPTION_NAME`].

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use thiserror::Error;

use super::call::{ErrorPolicy, settle};
use super::{Exception, TypedError};
use crate::control::Either;

/// A timeout-bounded call did not settle in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("operation timed out after {duration:?}")]
pub struct TimeoutError {
    /// The limit that was exceeded.
    pub duration: Duration,
}

impl TimeoutError {
    /// Name of the exception a timeout is reported as.
    pub const EXCEPTION_NAME: &'static str = "TimeoutError";
}

impl From<TimeoutError> for Exception {
    fn from(error: TimeoutError) -> Self {
        Self::named(TimeoutError::EXCEPTION_NAME, error.to_string())
    }
}

/// Awaits a callback that already returns an `Either`, catching panics.
///
/// # Examples
///
/// ```rust
/// use foundation_types::control::Either;
/// use foundation_types::error::{AsUnknown, UnknownError, safe_async_throw_call};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let passed: Either<UnknownError, i32> =
///     safe_async_throw_call(|| async { Either::Right(2 + 2) }, AsUnknown).await;
/// assert_eq!(passed, Either::Right(4));
/// # });
/// ```
pub async fn safe_async_throw_call<L, R, C, Fut, P>(call: C, policy: P) -> Either<L, R>
where
    L: Into<TypedError>,
    C: FnOnce() -> Fut,
    Fut: Future<Output = Either<L, R>>,
    P: ErrorPolicy<L>,
{
    match AssertUnwindSafe(async move { call().await }).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => Either::Left(settle(payload, policy)),
    }
}

/// Awaits a callback returning a plain value, wrapping it in `Right`.
pub async fn run_async_catching<L, O, C, Fut, P>(call: C, policy: P) -> Either<L, O>
where
    L: Into<TypedError>,
    C: FnOnce() -> Fut,
    Fut: Future<Output = O>,
    P: ErrorPolicy<L>,
{
    safe_async_throw_call(move || async move { Either::Right(call().await) }, policy).await
}

/// Like [`safe_async_throw_call`], but gives up after `limit`.
///
/// Must run inside a Tokio runtime with the time driver enabled.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use foundation_types::control::Either;
/// use foundation_types::error::{AsUnknown, TypedError, safe_async_throw_call_within};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let outcome: Either<TypedError, ()> = safe_async_throw_call_within(
///     Duration::from_millis(5),
///     || std::future::pending(),
///     AsUnknown,
/// )
/// .await;
/// assert!(outcome.is_left());
/// # });
/// ```
pub async fn safe_async_throw_call_within<L, R, C, Fut, P>(
    limit: Duration,
    call: C,
    policy: P,
) -> Either<L, R>
where
    L: Into<TypedError>,
    C: FnOnce() -> Fut,
    Fut: Future<Output = Either<L, R>>,
    P: ErrorPolicy<L>,
{
    let guarded = AssertUnwindSafe(async move { call().await }).catch_unwind();
    match tokio::time::timeout(limit, guarded).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(payload)) => Either::Left(settle(payload, policy)),
        Err(_elapsed) => {
            let error = TimeoutError { duration: limit };
            tracing::warn!(?limit, "safe call timed out");
            Either::Left(policy.classify(Exception::from(error)))
        }
    }
}

/// Like [`run_async_catching`], but gives up after `limit`.
pub async fn run_async_catching_within<L, O, C, Fut, P>(
    limit: Duration,
    call: C,
    policy: P,
) -> Either<L, O>
where
    L: Into<TypedError>,
    C: FnOnce() -> Fut,
    Fut: Future<Output = O>,
    P: ErrorPolicy<L>,
{
    safe_async_throw_call_within(
        limit,
        move || async move { Either::Right(call().await) },
        policy,
    )
    .await
}
