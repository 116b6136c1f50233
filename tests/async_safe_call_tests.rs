#![cfg(feature = "async")]
//! Integration tests for the asynchronous safe-call wrappers.
//!
//! Every scenario defers the callback's completion past at least one
//! suspension point, so the wrapper really awaits before settling.

use foundation_types::control::Either;
use foundation_types::error::{
    AsUnknown, TimeoutError, Transform, TypedError, UnknownError, is_unknown_error,
    run_async_catching, run_async_catching_within, safe_async_throw_call,
    safe_async_throw_call_within,
};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

async fn deferred<T>(value: T) -> T {
    tokio::time::sleep(Duration::from_millis(20)).await;
    value
}

// =============================================================================
// safe_async_throw_call
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn async_safe_call_passes_right_through() {
    let outcome: Either<UnknownError, i32> =
        safe_async_throw_call(|| deferred(Either::Right(4)), AsUnknown).await;
    assert_eq!(outcome, Either::Right(4));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn async_safe_call_classifies_panic_as_unknown() {
    let outcome: Either<TypedError, i32> = safe_async_throw_call(
        || async {
            deferred(()).await;
            panic!("boom")
        },
        AsUnknown,
    )
    .await;

    assert!(outcome.left().is_some_and(|error| is_unknown_error(&error)));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn async_safe_call_uses_transform() {
    let outcome: Either<TypedError, i32> = safe_async_throw_call(
        || async {
            deferred(()).await;
            panic!("boom")
        },
        Transform::new(|exception| TypedError::new("custom", exception.message())),
    )
    .await;

    let error = outcome
        .left()
        .map(|error| (error.error_type().to_owned(), error.cause().to_owned()));
    assert_eq!(error, Some(("custom".to_owned(), "boom".to_owned())));
}

#[rstest]
#[tokio::test]
async fn async_safe_call_catches_panic_while_invoking() {
    let outcome: Either<UnknownError, i32> = safe_async_throw_call(
        || -> std::future::Ready<Either<UnknownError, i32>> { panic!("not even a future") },
        AsUnknown,
    )
    .await;
    assert_eq!(
        outcome,
        Either::Left(UnknownError::with_stack("not even a future", "not even a future"))
    );
}

// =============================================================================
// run_async_catching
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn run_async_catching_wraps_value_in_right() {
    let outcome: Either<UnknownError, i32> = run_async_catching(|| deferred(4), AsUnknown).await;
    assert_eq!(outcome, Either::Right(4));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn run_async_catching_classifies_panic_as_unknown() {
    let outcome: Either<UnknownError, i32> = run_async_catching(
        || async {
            deferred(()).await;
            panic!("x")
        },
        AsUnknown,
    )
    .await;
    assert_eq!(outcome, Either::Left(UnknownError::with_stack("x", "x")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn run_async_catching_is_send_across_tasks() {
    let handle = tokio::spawn(run_async_catching::<UnknownError, _, _, _, _>(
        || async {
            tokio::task::yield_now().await;
            "done"
        },
        AsUnknown,
    ));
    assert_eq!(handle.await.ok(), Some(Either::Right("done")));
}

// =============================================================================
// Timeouts
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn within_limit_returns_outcome() {
    let outcome: Either<UnknownError, i32> = safe_async_throw_call_within(
        Duration::from_secs(1),
        || deferred(Either::Right(4)),
        AsUnknown,
    )
    .await;
    assert_eq!(outcome, Either::Right(4));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn expired_limit_is_unknown_by_default() {
    let outcome: Either<UnknownError, ()> = run_async_catching_within(
        Duration::from_millis(100),
        || tokio::time::sleep(Duration::from_secs(10)),
        AsUnknown,
    )
    .await;

    let error = outcome.left().expect("timeout must become Left");
    assert_eq!(error.cause(), "operation timed out after 100ms");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn expired_limit_drops_callback_future() {
    let completed = Arc::new(AtomicUsize::new(0));
    let flag = Arc::clone(&completed);

    let outcome: Either<TypedError, ()> = run_async_catching_within(
        Duration::from_millis(10),
        move || async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            flag.fetch_add(1, Ordering::SeqCst);
        },
        Transform::new(|exception| TypedError::new("deadline", exception.name())),
    )
    .await;

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(completed.load(Ordering::SeqCst), 0);
    assert_eq!(
        outcome.left().map(|error| error.cause().to_owned()),
        Some(TimeoutError::EXCEPTION_NAME.to_owned())
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn panic_before_limit_is_classified_as_panic() {
    let outcome: Either<TypedError, ()> = run_async_catching_within(
        Duration::from_secs(1),
        || async {
            deferred(()).await;
            panic!("crashed early")
        },
        Transform::new(|exception| TypedError::new("custom", exception.message())),
    )
    .await;
    assert_eq!(outcome, Either::Left(TypedError::new("custom", "crashed early")));
}
