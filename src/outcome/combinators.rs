//! Combinators on [`Outcome`].
//!
//! Every combinator consumes `self`, so the untouched payload is moved, never
//! copied. To keep the original, call the combinator on `outcome.as_ref()` or
//! on a clone. User functions run at most once and only on the live payload.
//! Panics raised by them propagate unchanged.

use super::Outcome;
use crate::storage::Storage;

impl<V, E> Outcome<V, E> {
    /// Transforms the value, passing an error through.
    ///
    /// ```rust
    /// use outcome::{make_value, Outcome};
    ///
    /// let c: Outcome<i32, String> = make_value(5).into();
    /// assert_eq!(c.map(|x| x + 1).value(), Some(6));
    /// ```
    #[inline]
    pub fn map<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self.into_storage() {
            Storage::Value(v) => Outcome::from_value(f(v)),
            Storage::Error(e) => Outcome::from_error(e),
        }
    }

    /// Transforms the error, passing a value through.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self.into_storage() {
            Storage::Value(v) => Outcome::from_value(v),
            Storage::Error(e) => Outcome::from_error(f(e)),
        }
    }

    /// Transforms both sides at once.
    #[inline]
    pub fn map_both<V2, E2, F, G>(self, on_value: F, on_error: G) -> Outcome<V2, E2>
    where
        F: FnOnce(V) -> V2,
        G: FnOnce(E) -> E2,
    {
        match self.into_storage() {
            Storage::Value(v) => Outcome::from_value(on_value(v)),
            Storage::Error(e) => Outcome::from_error(on_error(e)),
        }
    }

    /// Chains a fallible step on the value.
    ///
    /// `f` returns a whole `Outcome` with the same error type, which is
    /// returned as is: no double wrapping.
    ///
    /// ```rust
    /// use outcome::{make_error, make_value, Outcome};
    ///
    /// let double_positive = |x: i32| -> Outcome<i32, String> {
    ///     if x > 0 { make_value(x * 2).into() } else { make_error("neg".to_owned()).into() }
    /// };
    /// let c: Outcome<i32, String> = make_value(5).into();
    /// assert_eq!(c.and_then(double_positive).value(), Some(10));
    /// ```
    #[inline]
    pub fn and_then<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self.into_storage() {
            Storage::Value(v) => f(v),
            Storage::Error(e) => Outcome::from_error(e),
        }
    }

    /// Recovers from the error with a fallible step.
    ///
    /// Mirror image of [`and_then`](Self::and_then): `f` must produce the same
    /// value type.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self.into_storage() {
            Storage::Value(v) => Outcome::from_value(v),
            Storage::Error(e) => f(e),
        }
    }

    /// Eliminates the outcome by applying the function matching the live side.
    ///
    /// Every other combinator can be written in terms of this one.
    #[inline]
    pub fn join_with<R, F, G>(self, on_value: F, on_error: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        self.into_storage().fold(on_value, on_error)
    }

    /// Collapses both sides into a common type `C`.
    #[inline]
    pub fn join_into<C>(self) -> C
    where
        V: Into<C>,
        E: Into<C>,
    {
        self.join_with(|v| v.into(), |e| e.into())
    }

    /// Runs `f` on the value by reference and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Some(v) = self.value_ref() {
            f(v);
        }
        self
    }

    /// Runs `f` on the error by reference and returns `self` unchanged.
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Some(e) = self.error_ref() {
            f(e);
        }
        self
    }

    /// Returns the value, or `default` if this is an error.
    #[inline]
    pub fn value_or(self, default: V) -> V {
        self.join_with(|v| v, |_| default)
    }

    /// Returns the value, or computes one from the error.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        self.join_with(|v| v, f)
    }
}

impl<T> Outcome<T, T> {
    /// Returns whichever payload is live when both sides share a type.
    ///
    /// ```rust
    /// use outcome::{make_error, make_value, Outcome};
    ///
    /// let c: Outcome<i32, i32> = make_value(3).into();
    /// let d: Outcome<i32, i32> = make_error(7).into();
    /// assert_eq!(c.join(), 3);
    /// assert_eq!(d.join(), 7);
    /// ```
    #[inline]
    pub fn join(self) -> T {
        self.join_with(|v| v, |e| e)
    }
}
