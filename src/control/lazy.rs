//! Deferred values with in-place memoization.
//!
//! A [`Lazy`] holds either a callback that has not run yet or the value the
//! callback produced. The first call to [`Lazy::compute`] runs the callback
//! and stores its result in the same slot, so later calls never run it again.
//!
//! # Examples
//!
//! ```rust
//! use foundation_types::control::Lazy;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//!
//! assert_eq!(*lazy.compute(), 42);
//! assert_eq!(*lazy.compute(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

use thiserror::Error;

/// The slot behind a [`Lazy`].
///
/// The state is an explicit tag rather than a check on the payload type, so
/// a lazy whose value is itself a closure is never mistaken for a pending one.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The callback has not run yet.
    Pending(F),
    /// The callback ran and produced this value.
    Computed(T),
    /// The callback panicked. The lazy value is unusable.
    Poisoned,
}

/// Returned by [`Lazy::try_compute`] and [`Lazy::into_inner`] when the
/// callback panicked during an earlier computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lazy value is poisoned: its callback panicked during computation")]
pub struct LazyPoisonedError;

/// A value computed on first demand.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The type of the callback (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// Not thread-safe: the slot is a `RefCell`.
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a lazy value that will run `callback` on first [`compute`](Self::compute).
    #[inline]
    pub const fn new(callback: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Pending(callback)),
        }
    }

    /// Computes the value if needed and borrows it.
    ///
    /// # Panics
    ///
    /// - If the callback panics. The lazy value is poisoned afterwards.
    /// - If the lazy value was already poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| "hello".to_string());
    /// assert_eq!(lazy.compute().len(), 5);
    /// ```
    pub fn compute(&self) -> Ref<'_, T> {
        match self.try_compute() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Computes the value if needed and borrows it, reporting poisoning as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier computation panicked.
    ///
    /// # Panics
    ///
    /// If the callback itself panics during this call.
    pub fn try_compute(&self) -> Result<Ref<'_, T>, LazyPoisonedError> {
        let pending = matches!(&*self.state.borrow(), LazyState::Pending(_));
        if pending {
            self.run_callback();
        }

        self.get().ok_or(LazyPoisonedError)
    }

    /// Takes the callback out, leaving `Poisoned` behind until it returns.
    fn run_callback(&self) {
        let mut state = self.state.borrow_mut();
        let LazyState::Pending(callback) = std::mem::replace(&mut *state, LazyState::Poisoned)
        else {
            return;
        };

        tracing::trace!(value_type = std::any::type_name::<T>(), "computing lazy value");
        *state = LazyState::Computed(callback());
    }

    /// Consumes the lazy value and returns the computed result.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier computation panicked.
    pub fn into_inner(self) -> Result<T, LazyPoisonedError> {
        match self.state.into_inner() {
            LazyState::Computed(value) => Ok(value),
            LazyState::Pending(callback) => Ok(callback()),
            LazyState::Poisoned => Err(LazyPoisonedError),
        }
    }

    /// Defers `function` until the new lazy value is computed.
    ///
    /// # Panics
    ///
    /// The returned lazy value panics on computation if `self` was poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Lazy;
    ///
    /// let doubled = Lazy::new(|| 21).map(|x| x * 2);
    /// assert_eq!(*doubled.compute(), 42);
    /// ```
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || match self.into_inner() {
            Ok(value) => function(value),
            Err(error) => panic!("{error}"),
        })
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates a lazy value that is already computed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::control::Lazy;
    ///
    /// let lazy = Lazy::from_value(0);
    /// assert!(lazy.is_computed());
    /// ```
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Computed(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Borrows the value if it has been computed, without computing it.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Computed(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Computed(_))
    }

    /// Returns whether the callback panicked during computation.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Computed(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Pending(_) => formatter.debug_tuple("Lazy").field(&"<pending>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
