//! Deferred values whose callback produces a future.
//!
//! [`AsyncLazy`] mirrors [`Lazy`](super::Lazy): the callback is invoked at
//! most once, the awaited result replaces it in the slot, and every later
//! [`compute`](AsyncLazy::compute) resolves immediately to the stored value.
//!
//! Computing needs `&mut self`. The only suspension point is the await on
//! the callback's future, and exclusive access keeps a second computation
//! from starting while the first one is suspended.

use std::fmt;
use std::future::{Future, Ready};

use super::LazyPoisonedError;

enum Slot<T, F> {
    Pending(F),
    Computed(T),
    Poisoned,
}

/// A value computed on first demand by an asynchronous callback.
///
/// If the future returned by [`compute`](Self::compute) is dropped before it
/// completes, or the callback panics, the value is poisoned.
///
/// # Examples
///
/// ```rust
/// use foundation_types::control::AsyncLazy;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut lazy = AsyncLazy::new(|| async { 40 + 2 });
/// assert!(!lazy.is_computed());
///
/// assert_eq!(*lazy.compute().await, 42);
/// assert!(lazy.is_computed());
/// # });
/// ```
pub struct AsyncLazy<T, F> {
    slot: Slot<T, F>,
}

impl<T, F, Fut> AsyncLazy<T, F>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    /// Creates a lazy value that will await `callback()` on first computation.
    #[inline]
    pub const fn new(callback: F) -> Self {
        Self {
            slot: Slot::Pending(callback),
        }
    }

    /// Computes the value if needed and borrows it.
    ///
    /// # Panics
    ///
    /// - If the callback or its future panics. The value is poisoned afterwards.
    /// - If the value was already poisoned.
    pub async fn compute(&mut self) -> &T {
        match self.try_compute().await {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Computes the value if needed, reporting poisoning as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier computation panicked or
    /// was cancelled mid-await.
    pub async fn try_compute(&mut self) -> Result<&T, LazyPoisonedError> {
        if matches!(self.slot, Slot::Pending(_)) {
            if let Slot::Pending(callback) = std::mem::replace(&mut self.slot, Slot::Poisoned) {
                tracing::trace!(value_type = std::any::type_name::<T>(), "computing async lazy value");
                self.slot = Slot::Computed(callback().await);
            }
        }

        match &self.slot {
            Slot::Computed(value) => Ok(value),
            _ => Err(LazyPoisonedError),
        }
    }

    /// Consumes the lazy value, computing it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier computation failed.
    pub async fn into_inner(self) -> Result<T, LazyPoisonedError> {
        match self.slot {
            Slot::Computed(value) => Ok(value),
            Slot::Pending(callback) => Ok(callback().await),
            Slot::Poisoned => Err(LazyPoisonedError),
        }
    }
}

impl<T> AsyncLazy<T, fn() -> Ready<T>> {
    /// Creates a lazy value that is already computed.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            slot: Slot::Computed(value),
        }
    }
}

impl<T, F> AsyncLazy<T, F> {
    /// Borrows the value if it has been computed.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match &self.slot {
            Slot::Computed(value) => Some(value),
            _ => None,
        }
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub const fn is_computed(&self) -> bool {
        matches!(self.slot, Slot::Computed(_))
    }

    /// Returns whether a computation panicked or was abandoned mid-await.
    #[inline]
    pub const fn is_poisoned(&self) -> bool {
        matches!(self.slot, Slot::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for AsyncLazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("AsyncLazy");
        match &self.slot {
            Slot::Computed(value) => tuple.field(value),
            Slot::Pending(_) => tuple.field(&"<pending>"),
            Slot::Poisoned => tuple.field(&"<poisoned>"),
        };
        tuple.finish()
    }
}
