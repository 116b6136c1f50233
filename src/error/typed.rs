//! Tag-discriminated error records.
//!
//! A [`TypedError`] carries a type tag, a human-readable cause and an
//! optional stack trace. Narrower error kinds are newtypes around it whose
//! tag is pinned to one literal; [`typed_error!`](crate::typed_error)
//! declares them and [`ErrorVariant`] describes them.

use std::borrow::Cow;

use thiserror::Error;

use super::Exception;
use crate::control::Either;

/// An error with a discriminant `type`, a `cause` and an optional `stack`.
///
/// The type tag is the runtime discriminant: two errors are the same kind
/// exactly when their tags are equal. A `TypedError` is not mutated after
/// construction.
///
/// # Examples
///
/// ```rust
/// use foundation_types::error::{TypedError, is_typed_error};
///
/// let error = TypedError::new("config-error", "missing key `port`");
/// assert!(is_typed_error(&error, "config-error"));
/// assert_eq!(error.to_string(), "config-error: missing key `port`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{error_type}: {cause}")]
pub struct TypedError {
    error_type: Cow<'static, str>,
    cause: String,
    stack: Option<String>,
}

impl TypedError {
    /// Creates an error without a stack trace.
    ///
    /// `error_type` is expected to be a non-empty identifier.
    pub fn new(error_type: impl Into<Cow<'static, str>>, cause: impl Into<String>) -> Self {
        let error_type = error_type.into();
        debug_assert!(!error_type.is_empty(), "TypedError type tag must not be empty");
        Self {
            error_type,
            cause: cause.into(),
            stack: None,
        }
    }

    /// Creates an error carrying the stack trace up to its origin.
    pub fn with_stack(
        error_type: impl Into<Cow<'static, str>>,
        cause: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            stack: Some(stack.into()),
            ..Self::new(error_type, cause)
        }
    }

    /// The discriminant tag.
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// What caused the error.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// The stack trace up to the error origin, if recorded.
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Returns `true` if this error's tag equals `error_type`.
    #[inline]
    pub fn is(&self, error_type: &str) -> bool {
        self.error_type == error_type
    }

    /// Returns `true` if this error carries the tag of variant `V`.
    #[inline]
    pub fn is_variant<V: ErrorVariant>(&self) -> bool {
        self.is(V::TYPE)
    }

    /// Narrows to variant `V`, or hands the error back unchanged as `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foundation_types::error::{ReadError, TypedError};
    ///
    /// let error = TypedError::new("read-error", "closed file descriptor");
    /// let narrowed = error.narrow::<ReadError>();
    /// assert!(narrowed.is_right());
    /// ```
    pub fn narrow<V: ErrorVariant>(self) -> Either<Self, V> {
        if self.is_variant::<V>() {
            Either::Right(V::from_tagged(self))
        } else {
            Either::Left(self)
        }
    }
}

/// Returns `true` if `value`'s tag equals `error_type`.
///
/// This is the runtime narrowing check; see [`TypedError::narrow`] for the
/// typed counterpart.
#[inline]
pub fn is_typed_error(value: &TypedError, error_type: &str) -> bool {
    value.is(error_type)
}

/// Wraps a [`TypedError`] in an [`Exception`].
///
/// `type` becomes the name, `cause` the message and `stack` the trace.
pub fn wrap(value: TypedError) -> Exception {
    Exception::from_parts(value.error_type, value.cause, value.stack)
}

/// Unwraps an [`Exception`] into a [`TypedError`]. Inverse of [`wrap`].
///
/// # Examples
///
/// ```rust
/// use foundation_types::error::{TypedError, unwrap, wrap};
///
/// let error = TypedError::with_stack("error", "system crash", "main.rs:3");
/// assert_eq!(unwrap(wrap(error.clone())), error);
/// ```
pub fn unwrap(value: Exception) -> TypedError {
    let (name, message, trace) = value.into_parts();
    TypedError {
        error_type: name,
        cause: message,
        stack: trace,
    }
}

impl From<TypedError> for Exception {
    fn from(value: TypedError) -> Self {
        wrap(value)
    }
}

impl From<Exception> for TypedError {
    fn from(value: Exception) -> Self {
        unwrap(value)
    }
}

/// A [`TypedError`] refinement whose tag is pinned to [`ErrorVariant::TYPE`].
///
/// Implemented by every type declared with [`typed_error!`](crate::typed_error).
pub trait ErrorVariant: Into<TypedError> + Sized {
    /// The literal tag every value of this variant carries.
    const TYPE: &'static str;

    /// Reinterprets an error already known to carry [`Self::TYPE`].
    ///
    /// Callers check the tag first; [`TypedError::narrow`] does.
    fn from_tagged(error: TypedError) -> Self;
}

/// Declares a [`TypedError`] variant pinned to a literal tag.
///
/// The generated newtype gets `new(cause)`, `with_stack(cause, stack)`,
/// `Deref<Target = TypedError>`, `Display`, `std::error::Error`,
/// conversions to and from `TypedError`, an [`ErrorVariant`] impl and a
/// free predicate `is_<snake_case_name>(&TypedError) -> bool`.
///
/// # Examples
///
/// ```rust
/// use foundation_types::typed_error;
/// use foundation_types::error::{ErrorVariant, TypedError};
///
/// typed_error! {
///     /// Raised when a configuration file cannot be parsed.
///     pub struct ConfigError = "config-error";
/// }
///
/// let error = ConfigError::new("missing key `port`");
/// assert_eq!(error.error_type(), "config-error");
/// assert_eq!(ConfigError::TYPE, "config-error");
///
/// let erased: TypedError = error.into();
/// assert!(is_config_error(&erased));
/// ```
#[macro_export]
macro_rules! typed_error {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $tag:literal;
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            $vis struct $name($crate::error::TypedError);

            impl $name {
                /// Creates the error without a stack trace.
                pub fn new(cause: impl Into<String>) -> Self {
                    Self($crate::error::TypedError::new($tag, cause))
                }

                /// Creates the error with the stack trace up to its origin.
                pub fn with_stack(cause: impl Into<String>, stack: impl Into<String>) -> Self {
                    Self($crate::error::TypedError::with_stack($tag, cause, stack))
                }

                /// Erases the variant, keeping the tagged record.
                pub fn into_inner(self) -> $crate::error::TypedError {
                    self.0
                }
            }

            impl $crate::error::ErrorVariant for $name {
                const TYPE: &'static str = $tag;

                fn from_tagged(error: $crate::error::TypedError) -> Self {
                    Self(error)
                }
            }

            impl ::std::ops::Deref for $name {
                type Target = $crate::error::TypedError;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, formatter)
                }
            }

            impl ::std::error::Error for $name {}

            impl ::std::convert::From<$name> for $crate::error::TypedError {
                fn from(value: $name) -> Self {
                    value.0
                }
            }

            impl ::std::convert::TryFrom<$crate::error::TypedError> for $name {
                type Error = $crate::error::TypedError;

                fn try_from(value: $crate::error::TypedError) -> ::std::result::Result<Self, Self::Error> {
                    value.narrow::<$name>().fold(Err, Ok)
                }
            }

            #[doc = "Returns `true` if `value` carries the `" $tag "` tag."]
            #[inline]
            $vis fn [<is_ $name:snake>](value: &$crate::error::TypedError) -> bool {
                value.is($tag)
            }
        }
    };
}
