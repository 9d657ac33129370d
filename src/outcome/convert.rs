//! Conversions between [`Outcome`] and neighbouring sum types.
//!
//! - `core::result::Result<V, E>`: `Ok` is the value side.
//! - `either::Either<E, V>`: `Right` is the value side, matching the `either`
//!   crate's own `Result` conversions.

use core::fmt;

use either::Either;

use super::Outcome;
use crate::storage::{Storage, Variant};

/// Returned by the checked accessors when the other payload is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantError {
    /// Side the caller asked for.
    pub expected: Variant,
    /// Side that was actually live.
    pub found: Variant,
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} payload, found {}", self.expected, self.found)
    }
}

impl std::error::Error for VariantError {}

impl<V, E> Outcome<V, E> {
    /// Moves the value out.
    ///
    /// # Errors
    /// Returns `VariantError` (dropping the payload) if the error side is live.
    #[inline]
    pub fn try_into_value(self) -> Result<V, VariantError> {
        self.into_value().ok_or(VariantError {
            expected: Variant::Value,
            found: Variant::Error,
        })
    }

    /// Moves the error out.
    ///
    /// # Errors
    /// Returns `VariantError` (dropping the payload) if the value side is live.
    #[inline]
    pub fn try_into_error(self) -> Result<E, VariantError> {
        self.into_error().ok_or(VariantError {
            expected: Variant::Error,
            found: Variant::Value,
        })
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        self.join_with(Ok, Err)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => Outcome::from_value(v),
            Err(e) => Outcome::from_error(e),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V, E> From<Either<E, V>> for Outcome<V, E> {
    #[inline]
    fn from(either: Either<E, V>) -> Self {
        match either {
            Either::Right(v) => Outcome::from_value(v),
            Either::Left(e) => Outcome::from_error(e),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Either<E, V> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome.into_storage() {
            Storage::Value(v) => Either::Right(v),
            Storage::Error(e) => Either::Left(e),
        }
    }
}
