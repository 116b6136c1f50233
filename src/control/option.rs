//! Presence predicates over `Option`.
//!
//! `Option<T>` keeps absence as its own variant, so `None` can never be
//! confused with a legitimate `T`. These two functions give the check a name
//! that reads well next to [`Either::is_left`](super::Either::is_left).

/// Returns `true` if the option holds a value.
///
/// # Examples
///
/// ```rust
/// use foundation_types::control::present;
///
/// assert!(present(&Some(0)));
/// assert!(!present(&None::<i32>));
/// ```
#[inline]
pub const fn present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Returns `true` if the option is empty. Exact negation of [`present`].
///
/// # Examples
///
/// ```rust
/// use foundation_types::control::empty;
///
/// assert!(empty(&None::<i32>));
/// assert!(!empty(&Some(0)));
/// ```
#[inline]
pub const fn empty<T>(value: &Option<T>) -> bool {
    value.is_none()
}
