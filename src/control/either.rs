//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. Throughout this
//! crate `Left` carries a failure and `Right` carries a success, which is
//! how the safe-call wrappers in [`crate::error`] report their outcome.
//!
//! # Examples
//!
//! ```rust
//! use foundation_types::control::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! let describe = |value: Either<i32, String>| {
//!     value.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"))
//! };
//! assert_eq!(describe(left), "Number: 42");
//! assert_eq!(describe(right), "String: hello");
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// By convention `Left` is the failure side and `Right` the success side.
/// Exactly one variant is present per value, and a value is never mutated
/// by the operations below: every transformation consumes `self` and
/// produces a new `Either`.
///
/// # Type Parameters
///
/// * `L` - The type of the left (failure) value
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use foundation_types::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Tag Inspection
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// Always the exact negation of [`Either::is_right`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(0);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("ok");
    /// assert!(right.is_right());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Converts into `Some(l)` for `Left(l)`, `None` otherwise.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for `Right(r)`, `None` otherwise.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left payload if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right payload if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts `&Either<L, R>` into `Either<&L, &R>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Either;
    ///
    /// let value: Either<String, i32> = Either::Left("boom".to_string());
    /// let length = value.as_ref().fold(|s| s.len(), |_| 0);
    /// assert_eq!(length, 4);
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the left payload, leaving a `Right` untouched.
    ///
    /// A `Right` is moved through as-is; only its static left type changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(0);
    /// assert_eq!(left.map_left(|x| x + 1), Either::Left(1));
    ///
    /// let right: Either<i32, String> = Either::Right("kept".to_string());
    /// assert_eq!(right.map_left(|x| x + 1), Either::Right("kept".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to the right payload, leaving a `Left` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(7);
    /// assert_eq!(left.map_right(|s: String| s.len()), Either::Left(7));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    // =========================================================================
    // Fold
    // =========================================================================

    /// Eliminates the `Either` by applying exactly one of two functions.
    ///
    /// `left_function` runs for `Left`, `right_function` for `Right`; the
    /// other one is dropped without being called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Either;
    ///
    /// let left: Either<i32, i32> = Either::Left(0);
    /// assert_eq!(left.fold(|l| l + 1, |r| r), 1);
    ///
    /// let right: Either<i32, i32> = Either::Right(0);
    /// assert_eq!(right.fold(|l| l, |r| r - 1), -1);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
