//! Construction tags for [`Outcome`](crate::Outcome).
//!
//! A tag states which side of the container a payload belongs to. This matters
//! when `V` and `E` are the same type: `Outcome<i32, i32>` cannot infer intent
//! from a bare `i32`, but it can from `ValueTag(3)` or `ErrorTag(3)`.
//!
//! Tags are transient. They are built at a call site and consumed immediately by
//! `From` conversions on [`Storage`](crate::storage::Storage) and
//! [`Outcome`](crate::Outcome).

/// Marks a payload as the success side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ValueTag<V>(pub V);

/// Marks a payload as the error side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ErrorTag<E>(pub E);

impl<V> ValueTag<V> {
    /// Unwraps the tagged payload.
    #[inline]
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<E> ErrorTag<E> {
    /// Unwraps the tagged payload.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Tags `value` as a success payload.
///
/// ```rust
/// use outcome::{make_value, Outcome};
///
/// let outcome: Outcome<i32, String> = make_value(5).into();
/// assert!(outcome.is_value());
/// ```
#[inline]
pub fn make_value<V>(value: V) -> ValueTag<V> {
    ValueTag(value)
}

/// Tags `error` as an error payload.
///
/// ```rust
/// use outcome::{make_error, Outcome};
///
/// let outcome: Outcome<i32, String> = make_error(String::from("bad")).into();
/// assert!(outcome.is_error());
/// ```
#[inline]
pub fn make_error<E>(error: E) -> ErrorTag<E> {
    ErrorTag(error)
}
