//! The exception boundary.
//!
//! Rust "throws" by unwinding: `panic!` with a message, or
//! [`std::panic::panic_any`] with an arbitrary payload. [`Exception`] is the
//! crate's generic representation of whatever was thrown, with the three
//! properties the typed-error model maps onto: a name, a message and an
//! optional trace.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;

use thiserror::Error;

use super::{IoError, ReadError, TypedError, UnknownError, WriteError};

/// A generic exception value: `name`, `message` and an optional `trace`.
///
/// # Examples
///
/// ```rust
/// use foundation_types::error::Exception;
///
/// let exception = Exception::named("ParseError", "unexpected token");
/// assert_eq!(exception.name(), "ParseError");
/// assert_eq!(exception.message(), "unexpected token");
/// assert_eq!(exception.to_string(), "ParseError: unexpected token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{name}: {message}")]
pub struct Exception {
    name: Cow<'static, str>,
    message: String,
    trace: Option<String>,
}

impl Exception {
    /// Name given to exceptions created without an explicit one.
    pub const DEFAULT_NAME: &'static str = "Error";

    /// Creates an exception named [`Exception::DEFAULT_NAME`].
    ///
    /// The trace is a captured [`Backtrace`] when backtraces are enabled
    /// (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`), otherwise `None`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::named(Self::DEFAULT_NAME, message)
    }

    /// Creates an exception with an explicit name.
    ///
    /// The trace is captured like in [`Exception::new`].
    pub fn named(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            trace: capture_trace(),
        }
    }

    /// Builds an exception from its raw parts without capturing a trace.
    pub(crate) fn from_parts(
        name: Cow<'static, str>,
        message: String,
        trace: Option<String>,
    ) -> Self {
        Self {
            name,
            message,
            trace,
        }
    }

    /// Describes an error value as an exception, keeping its `Display` text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::error::Exception;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
    /// let exception = Exception::from_error(&io);
    /// assert_eq!(exception.message(), "missing.txt");
    /// ```
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(error.to_string())
    }

    /// Replaces the trace.
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Drops the trace.
    #[must_use]
    pub fn without_trace(mut self) -> Self {
        self.trace = None;
        self
    }

    /// The exception's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exception's message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The trace captured or attached to this exception, if any.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Cow<'static, str>, String, Option<String>) {
        (self.name, self.message, self.trace)
    }
}

fn capture_trace() -> Option<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}

/// Recognises the erased record and the built-in variants.
fn downcast_typed(payload: Box<dyn Any + Send>) -> Result<TypedError, Box<dyn Any + Send>> {
    let payload = match payload.downcast::<TypedError>() {
        Ok(typed) => return Ok(*typed),
        Err(other) => other,
    };
    let payload = match payload.downcast::<UnknownError>() {
        Ok(error) => return Ok((*error).into_inner()),
        Err(other) => other,
    };
    let payload = match payload.downcast::<IoError>() {
        Ok(error) => return Ok((*error).into()),
        Err(other) => other,
    };
    let payload = match payload.downcast::<ReadError>() {
        Ok(error) => return Ok((*error).into_inner()),
        Err(other) => other,
    };
    payload
        .downcast::<WriteError>()
        .map(|error| (*error).into_inner())
}

/// Message used for panic payloads that carry no recognisable description.
pub const UNRECOGNIZED_PAYLOAD: &str = "panic with a payload of unrecognized type";

/// Normalizes a caught panic payload into an [`Exception`].
///
/// - An [`Exception`] payload is returned unchanged.
/// - A [`TypedError`] payload, or one of the built-in variants, is wrapped,
///   keeping its type as the name.
/// - A boxed `dyn Error` keeps its `Display` text as the message.
/// - `String` and `&'static str` payloads (what `panic!` produces) become
///   the message of a new exception.
/// - Anything else becomes an exception with [`UNRECOGNIZED_PAYLOAD`] as
///   its message. The payload itself is dropped.
///
/// # Examples
///
/// ```rust
/// use foundation_types::error::safe_unknown_error;
///
/// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
/// assert_eq!(safe_unknown_error(payload).message(), "boom");
/// ```
pub fn safe_unknown_error(payload: Box<dyn Any + Send>) -> Exception {
    let payload = match payload.downcast::<Exception>() {
        Ok(exception) => return *exception,
        Err(other) => other,
    };
    let payload = match downcast_typed(payload) {
        Ok(typed) => return super::wrap(typed),
        Err(other) => other,
    };
    let payload = match payload.downcast::<Box<dyn std::error::Error + Send + Sync>>() {
        Ok(error) => return Exception::from_error(&**error),
        Err(other) => other,
    };
    let payload = match payload.downcast::<String>() {
        Ok(message) => return Exception::new(*message),
        Err(other) => other,
    };
    match payload.downcast::<&'static str>() {
        Ok(message) => Exception::new(*message),
        Err(other) => {
            tracing::debug!(payload_type_id = ?(*other).type_id(), "unrecognized panic payload");
            Exception::new(UNRECOGNIZED_PAYLOAD)
        }
    }
}
