#![cfg(feature = "error")]
//! Unit tests for the IO error variants.

use foundation_types::control::Either;
use foundation_types::error::{
    IoError, ReadError, Transform, TypedError, WriteError, is_read_error, is_write_error,
    run_catching,
};
use rstest::rstest;
use std::io::{self, Read, Write};

/// A stream whose every operation fails as if its descriptor were closed.
struct ClosedStream;

impl Read for ClosedStream {
    fn read(&mut self, _buffer: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed file descriptor"))
    }
}

impl Write for ClosedStream {
    fn write(&mut self, _buffer: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed file descriptor"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn read_all(stream: &mut impl Read) -> Either<IoError, Vec<u8>> {
    let mut bytes = Vec::new();
    stream
        .read_to_end(&mut bytes)
        .map(|_| bytes)
        .map_err(|error| IoError::read_failure(&error))
        .into()
}

fn write_all(stream: &mut impl Write, bytes: &[u8]) -> Either<IoError, ()> {
    stream
        .write_all(bytes)
        .map_err(|error| IoError::write_failure(&error))
        .into()
}

#[rstest]
fn read_error_is_read_error() {
    let value: TypedError = ReadError::new("closed file descriptor").into();
    assert!(is_read_error(&value));
    assert!(!is_write_error(&value));
    assert_eq!(value.error_type(), "read-error");
}

#[rstest]
fn write_error_is_write_error() {
    let value: TypedError = WriteError::new("closed file descriptor").into();
    assert!(is_write_error(&value));
    assert!(!is_read_error(&value));
    assert_eq!(value.error_type(), "write-error");
}

#[rstest]
fn failed_read_from_closed_stream() {
    let outcome = read_all(&mut ClosedStream);
    let error = outcome.left().map(TypedError::from);
    assert_eq!(
        error,
        Some(TypedError::new("read-error", "closed file descriptor"))
    );
}

#[rstest]
fn failed_write_to_closed_stream() {
    let outcome = write_all(&mut ClosedStream, b"payload");
    assert!(outcome.left().is_some_and(|error| error.is_write_error()));
}

#[rstest]
fn successful_read_is_right() {
    let outcome = read_all(&mut &b"abc"[..]);
    assert_eq!(outcome.right(), Some(b"abc".to_vec()));
}

#[rstest]
fn io_error_narrows_back_from_typed_error() {
    let erased: TypedError = IoError::from(WriteError::new("disk full")).into();
    let narrowed = erased.narrow::<WriteError>();
    assert_eq!(
        narrowed.right().map(|error| error.cause().to_owned()),
        Some("disk full".to_owned())
    );
}

#[rstest]
fn panicking_reader_classified_as_read_error() {
    let outcome: Either<IoError, Vec<u8>> = run_catching(
        || -> Vec<u8> { panic!("reader thread died") },
        Transform::new(|exception| IoError::from(ReadError::new(exception.message()))),
    );
    assert_eq!(
        outcome.left().map(|error| error.as_typed().cause().to_owned()),
        Some("reader thread died".to_owned())
    );
}
