//! The default classification for failures nothing else recognises.

use std::any::Any;

use super::{Exception, safe_unknown_error};

crate::typed_error! {
    /// A [`TypedError`](super::TypedError) tagged `"unknown-error"`.
    ///
    /// Safe-call wrappers produce it when no transform is supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::error::{UnknownError, is_unknown_error};
    ///
    /// let error = UnknownError::new("system crash");
    /// assert!(is_unknown_error(&error));
    /// assert_eq!(error.stack(), None);
    /// ```
    pub struct UnknownError = "unknown-error";
}

impl UnknownError {
    /// Classifies a caught exception.
    ///
    /// The exception's message becomes both the cause and the stack.
    pub fn from_exception(exception: &Exception) -> Self {
        let message = exception.message();
        Self::with_stack(message, message)
    }

    /// Classifies a raw panic payload, normalizing it with
    /// [`safe_unknown_error`] first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::error::UnknownError;
    ///
    /// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
    /// let error = UnknownError::from_payload(payload);
    /// assert_eq!(error.cause(), "boom");
    /// assert_eq!(error.stack(), Some("boom"));
    /// ```
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self::from_exception(&safe_unknown_error(payload))
    }
}

impl From<Exception> for UnknownError {
    fn from(exception: Exception) -> Self {
        Self::from_exception(&exception)
    }
}
