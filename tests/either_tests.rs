//! Unit tests for Either<L, R> type.
//!
//! Either is the failure-as-value carrier:
//! - `Left(L)`: A failure, usually a typed error
//! - `Right(R)`: A success

#![cfg(feature = "control")]

use foundation_types::control::Either;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
#[case(Either::Left(42), Some(42), None)]
#[case(Either::Right("hello"), None, Some("hello"))]
fn either_extraction(
    #[case] value: Either<i32, &'static str>,
    #[case] left: Option<i32>,
    #[case] right: Option<&'static str>,
) {
    assert_eq!(value.left(), left);
    assert_eq!(value.right(), right);
    assert_eq!(value.left_ref().copied(), left);
    assert_eq!(value.right_ref().copied(), right);
}

// =============================================================================
// Fold
// =============================================================================

fn divide(x: f64, y: f64) -> Either<&'static str, f64> {
    if y == 0.0 {
        return Either::Left("cannot divide number by 0!");
    }
    Either::Right(x / y)
}

#[rstest]
#[case(2.0, 0.0, "error: cannot divide number by 0!")]
#[case(2.0, 2.0, "division = 1")]
fn either_fold_selects_branch(#[case] x: f64, #[case] y: f64, #[case] expected: &str) {
    let message = divide(x, y).fold(
        |error| format!("error: {error}"),
        |quotient| format!("division = {quotient}"),
    );
    assert_eq!(message, expected);
}

#[rstest]
fn either_fold_invokes_exactly_one_function() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    let value: Either<i32, i32> = Either::Right(5);
    let result = value.fold(
        |l| {
            left_calls.set(left_calls.get() + 1);
            l
        },
        |r| {
            right_calls.set(right_calls.get() + 1);
            r * 2
        },
    );

    assert_eq!(result, 10);
    assert_eq!(left_calls.get(), 0);
    assert_eq!(right_calls.get(), 1);
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn either_map_right_leaves_left_untouched() {
    let value: Either<String, i32> = Either::Left("bad".to_string());
    assert_eq!(value.map_right(|n| n + 1), Either::Left("bad".to_string()));
}

#[rstest]
fn either_map_left_transforms_failure() {
    let value: Either<&str, i32> = Either::Left("bad");
    assert_eq!(value.map_left(str::len), Either::Left(3));
}

#[rstest]
fn either_as_ref_borrows() {
    let value: Either<String, Vec<i32>> = Either::Right(vec![1, 2, 3]);
    assert_eq!(value.as_ref().map_right(Vec::len), Either::Right(3));
    assert!(value.is_right());
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn either_from_result() {
    let ok: Either<String, i32> = Ok::<i32, String>(1).into();
    let err: Either<String, i32> = Err::<i32, String>("no".to_string()).into();
    assert_eq!(ok, Either::Right(1));
    assert_eq!(err, Either::Left("no".to_string()));
}

#[rstest]
fn either_into_result() {
    let value: Either<&str, i32> = Either::Left("no");
    let result: Result<i32, &str> = value.into();
    assert_eq!(result, Err("no"));
}

#[rstest]
fn either_debug_format() {
    let value: Either<i32, &str> = Either::Left(1);
    assert_eq!(format!("{value:?}"), "Left(1)");
}
