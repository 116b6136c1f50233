//! Typed errors and the boundary where panics become values.
//!
//! - [`Exception`]: The generic shape of anything thrown (name, message, trace)
//! - [`TypedError`]: A tag-discriminated error record, with variants declared by
//!   [`typed_error!`](crate::typed_error) ([`UnknownError`], [`ReadError`], [`WriteError`])
//! - [`safe_throw_call`] / [`run_catching`]: Run a callback, classify any panic
//!   through an [`ErrorPolicy`] and return an [`Either`](crate::control::Either)
//! - `safe_async_throw_call` / `run_async_catching` (feature `async`): The same
//!   for callbacks producing a future, plus timeout-bounded `_within` variants
//!
//! # Examples
//!
//! ```rust
//! use foundation_types::control::Either;
//! use foundation_types::error::{AsUnknown, TypedError, is_unknown_error, safe_throw_call};
//!
//! fn parse_port(raw: &str) -> Either<TypedError, u16> {
//!     safe_throw_call(
//!         || match raw.parse::<u16>() {
//!             Ok(port) => Either::Right(port),
//!             Err(error) => Either::Left(TypedError::new("config-error", error.to_string())),
//!         },
//!         AsUnknown,
//!     )
//! }
//!
//! assert_eq!(parse_port("8080"), Either::Right(8080));
//! assert!(parse_port("http").left().is_some_and(|error| error.is("config-error")));
//!
//! let crashed: Either<TypedError, u16> = safe_throw_call(|| panic!("config store offline"), AsUnknown);
//! assert!(crashed.left().is_some_and(|error| is_unknown_error(&error)));
//! ```

#[cfg(feature = "async")]
mod async_call;
mod call;
mod exception;
mod io;
mod typed;
mod unknown;

#[cfg(feature = "async")]
pub use async_call::{
    TimeoutError, run_async_catching, run_async_catching_within, safe_async_throw_call,
    safe_async_throw_call_within,
};
pub use call::{AsUnknown, ErrorPolicy, Transform, run_catching, safe_throw_call};
pub use exception::{Exception, UNRECOGNIZED_PAYLOAD, safe_unknown_error};
pub use io::{IoError, ReadError, WriteError, is_read_error, is_write_error};
pub use typed::{ErrorVariant, TypedError, is_typed_error, unwrap, wrap};
pub use unknown::{UnknownError, is_unknown_error};

static_assertions::assert_impl_all!(Exception: Send, Sync, Clone);
static_assertions::assert_impl_all!(TypedError: Send, Sync, Clone);
static_assertions::assert_impl_all!(UnknownError: Send, Sync, Clone);
static_assertions::assert_impl_all!(ReadError: Send, Sync, Clone);
static_assertions::assert_impl_all!(WriteError: Send, Sync, Clone);
static_assertions::assert_impl_all!(IoError: Send, Sync, Clone);
