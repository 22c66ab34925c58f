#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Allocation-free containers with constant capacity.
//!
//! Every container in this crate stores its elements inline, so its size is
//! known at compile time and it never touches an allocator. This makes them
//! suitable for firmware and other memory-constrained targets.
//!
//! * [`Deque<T, N>`](Deque) is a contiguous sequence holding up to `N`
//!   elements, supporting insertion and removal at both ends and at arbitrary
//!   positions.
//! * [`EmptyDeque<T>`](EmptyDeque) is its degenerate, zero-capacity
//!   counterpart.
//! * [`Array<T, N>`](Array) wraps a plain `[T; N]` and exposes the same query
//!   surface, with [`EmptyArray<T>`](EmptyArray) covering zero elements.
//!
//! Capacities are restricted to `1..=127`, so the occupied count always fits
//! in a single byte. Out-of-range capacities are rejected at compile time:
//!
//! ```compile_fail
//! let deque = coffer::Deque::<u8, 0>::new();
//! ```
//!
//! ```compile_fail
//! let deque = coffer::Deque::<u8, 128>::new();
//! ```
//!
//! Because the capacity is constant, operations that grow a container can
//! fail. Failure is always reported through the return value (`bool`,
//! [`Option`] or [`Result`](core::result::Result)) and never leaves a container
//! partially modified.
//!
//! # Features
//! * `std`: implements `std::error::Error` for the error types.
//! * `log`: emits `trace` records (target `coffer`) when a mutation is rejected.
//! * `unstable`: enables the nightly-only benchmarks.

#[cfg(any(feature = "std", test))]
extern crate std;

macro_rules! trace_rejected {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!(target: "coffer", $($arg)+);
    };
}

pub mod array;
pub mod deque;
pub mod empty;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::array::Array;
pub use crate::deque::Deque;
pub use crate::empty::{EmptyArray, EmptyDeque};

use core::fmt::{self, Display, Formatter};

/// The reasons an operation on a container can be rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The container was already full.
    CapacityExceeded,
    /// The value searched for is not in the container.
    NotFound,
    /// The index was not below the current element count.
    OutOfRange,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::CapacityExceeded => "container is already at capacity",
            ErrorKind::NotFound => "value not found in container",
            ErrorKind::OutOfRange => "index out of range",
        };
        f.write_str(msg)
    }
}

/// The error type for operations that would exceed a container's capacity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapacityError;

impl CapacityError {
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        CapacityError
    }

    /// Always [`ErrorKind::CapacityExceeded`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::CapacityExceeded
    }
}

impl Display for CapacityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&ErrorKind::CapacityExceeded, f)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for CapacityError {}

/// A specialized [`Result`](core::result::Result) type for operations that
/// can fail only by exceeding a container's capacity.
pub type Result<T> = core::result::Result<T, CapacityError>;

/// The error returned by [`Deque::try_insert`], handing back the rejected value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertError<T> {
    /// The index was not below the deque's current length.
    OutOfRange(T),
    /// The deque was already full.
    CapacityExceeded(T),
}

impl<T> InsertError<T> {
    /// Returns the reason the insertion was rejected.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InsertError::OutOfRange(_) => ErrorKind::OutOfRange,
            InsertError::CapacityExceeded(_) => ErrorKind::CapacityExceeded,
        }
    }

    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::OutOfRange(value) | InsertError::CapacityExceeded(value) => value,
        }
    }
}

impl<T> Display for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "insertion failed: {}", self.kind())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl<T: fmt::Debug> std::error::Error for InsertError<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn insert_error_reports_kind_and_value() {
        let err = InsertError::OutOfRange('x');
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "insertion failed: index out of range");
        assert_eq!(err.into_inner(), 'x');

        let err = InsertError::CapacityExceeded(7);
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(err.into_inner(), 7);
    }

    #[test]
    fn capacity_error_display() {
        assert_eq!(CapacityError::new().kind(), ErrorKind::CapacityExceeded);
        assert_eq!(
            CapacityError::new().to_string(),
            "container is already at capacity"
        );
    }

    #[test]
    #[cfg(feature = "log")]
    fn rejections_are_traced_without_a_logger() {
        let mut deque = Deque::<u8, 1>::new();
        assert!(deque.append(1));
        assert_eq!(deque.try_append(2), Err(2));
        assert_eq!(deque.try_prepend(3), Err(3));
        assert_eq!(
            deque.try_insert(1, 4).map_err(|e| e.kind()),
            Err(ErrorKind::OutOfRange)
        );
        assert_eq!(
            deque.try_insert(0, 5).map_err(|e| e.kind()),
            Err(ErrorKind::CapacityExceeded)
        );
        assert_eq!(deque.take_at(3), None);
        assert_eq!(
            Deque::<u8, 1>::try_from_slice(&[1, 2]),
            Err(CapacityError::new())
        );

        let mut empty = EmptyDeque::<u8>::new();
        assert!(!empty.append(1));
        assert!(!empty.insert(0, 1));
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }
}
