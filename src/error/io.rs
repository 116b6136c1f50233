//! Typed errors for IO read and write operations.

use std::io;

use thiserror::Error;

use super::TypedError;

crate::typed_error! {
    /// A failed read, like reading bytes from a closed stream.
    pub struct ReadError = "read-error";
}

crate::typed_error! {
    /// A failed write, like writing bytes to a closed stream.
    pub struct WriteError = "write-error";
}

/// Either kind of IO failure.
///
/// # Examples
///
/// ```rust
/// use foundation_types::error::{IoError, ReadError};
///
/// let error = IoError::from(ReadError::new("closed file descriptor"));
/// assert!(error.is_read_error());
/// assert!(!error.is_write_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum IoError {
    /// A read failed.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// A write failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl IoError {
    /// Describes a failed read reported by `std::io`.
    pub fn read_failure(error: &io::Error) -> Self {
        Self::Read(ReadError::new(error.to_string()))
    }

    /// Describes a failed write reported by `std::io`.
    pub fn write_failure(error: &io::Error) -> Self {
        Self::Write(WriteError::new(error.to_string()))
    }

    /// Returns `true` for a [`ReadError`].
    pub const fn is_read_error(&self) -> bool {
        matches!(self, Self::Read(_))
    }

    /// Returns `true` for a [`WriteError`].
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    /// Borrows the underlying tagged record.
    pub fn as_typed(&self) -> &TypedError {
        match self {
            Self::Read(error) => error,
            Self::Write(error) => error,
        }
    }
}

impl From<IoError> for TypedError {
    fn from(error: IoError) -> Self {
        match error {
            IoError::Read(error) => error.into(),
            IoError::Write(error) => error.into(),
        }
    }
}
