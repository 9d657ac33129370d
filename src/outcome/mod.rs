//! `Outcome<V, E>` - the public sum type.
//!
//! An `Outcome` wraps exactly one [`Storage`] and adds the total accessor API
//! and the combinators (see [`combinators`](self) for `map`, `and_then` and
//! friends). Accessors never hand out the wrong side: querying the inactive
//! payload yields `None`.
//!
//! ## Capability gating
//! - `value()` / `error()` copy the payload out and live in an impl block
//!   bounded on `V: Clone, E: Clone`.
//! - `into_value()` / `into_error()` move the payload and need no bound.
//! - `take()` / `take_from()` need `V: Default` to rebuild the source.
//! - `join()` exists only on `Outcome<T, T>`; `join_into::<C>()` needs both
//!   sides to convert into `C`.

mod combinators;
mod convert;


pub use convert::VariantError;

use crate::storage::{Storage, Variant};
use crate::tag::{ErrorTag, ValueTag};

/// Either a success value `V` or an error `E`.
///
/// ## Reference payloads
/// `V` and `E` may be reference types. Stable Rust has no "not a reference"
/// bound, and none is needed: the borrow checker ties an `Outcome<&V, &E>` to
/// the lifetime of what it borrows, so it can never outlive or alias its
/// referent unsoundly. [`as_ref`](Self::as_ref) and [`as_mut`](Self::as_mut)
/// rely on this to provide borrowing views of an owned outcome.
#[must_use]
#[derive(Debug, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Outcome<V, E> {
    storage: Storage<V, E>,
}

impl<V, E> Outcome<V, E> {
    /// Creates a success outcome.
    #[inline]
    pub const fn from_value(value: V) -> Self {
        Self { storage: Storage::Value(value) }
    }

    /// Creates an error outcome.
    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self { storage: Storage::Error(error) }
    }

    #[inline]
    pub(crate) fn into_storage(self) -> Storage<V, E> {
        self.storage
    }

    /// Returns `true` if this outcome holds a value.
    #[inline]
    pub const fn is_value(&self) -> bool {
        self.storage.is_value()
    }

    /// Returns `true` if this outcome holds an error.
    #[inline]
    pub const fn is_error(&self) -> bool {
        self.storage.is_error()
    }

    /// Returns which payload is live.
    #[inline]
    pub const fn variant(&self) -> Variant {
        self.storage.variant()
    }

    /// Moves the value out, or `None` if this is an error.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        self.storage.into_value()
    }

    /// Moves the error out, or `None` if this is a value.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        self.storage.into_error()
    }

    /// Borrows the value, if live.
    #[inline]
    pub const fn value_ref(&self) -> Option<&V> {
        self.storage.value()
    }

    /// Borrows the error, if live.
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        self.storage.error()
    }

    /// Mutably borrows the value, if live.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.storage.value_mut()
    }

    /// Mutably borrows the error, if live.
    #[inline]
    pub fn error_mut(&mut self) -> Option<&mut E> {
        self.storage.error_mut()
    }

    /// Views this outcome through shared references.
    ///
    /// Combinators consume `self`; running them on `as_ref()` leaves the
    /// original untouched and clones nothing.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        Outcome { storage: self.storage.as_ref() }
    }

    /// Views this outcome through mutable references.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        Outcome { storage: self.storage.as_mut() }
    }

    /// Moves the outcome out of a place, leaving a default value behind.
    ///
    /// Afterwards `self.is_value()` is `true` and `self.value()` is
    /// `Some(V::default())`, even if `self` held an error.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        V: Default,
    {
        Self { storage: self.storage.take() }
    }

    /// Move-assigns from `source`, which is reset as by [`take`](Self::take).
    #[inline]
    pub fn take_from(&mut self, source: &mut Self)
    where
        V: Default,
    {
        self.storage.take_from(&mut source.storage);
    }

    /// Installs `next`, returning the outcome it displaced.
    #[inline]
    pub fn replace(&mut self, next: Self) -> Self {
        Self { storage: self.storage.replace(next.storage) }
    }
}

impl<V: Clone, E: Clone> Outcome<V, E> {
    /// Copies the value out, or `None` if this is an error.
    #[inline]
    pub fn value(&self) -> Option<V> {
        self.storage.value().cloned()
    }

    /// Copies the error out, or `None` if this is a value.
    #[inline]
    pub fn error(&self) -> Option<E> {
        self.storage.error().cloned()
    }
}

// Hand-written to forward `clone_from` to the storage.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<V: Clone, E: Clone> Clone for Outcome<V, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { storage: self.storage.clone() }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<V: Default, E> Default for Outcome<V, E> {
    #[inline]
    fn default() -> Self {
        Self { storage: Storage::default() }
    }
}

impl<V, E> From<ValueTag<V>> for Outcome<V, E> {
    #[inline]
    fn from(tag: ValueTag<V>) -> Self {
        Self { storage: tag.into() }
    }
}

impl<V, E> From<ErrorTag<E>> for Outcome<V, E> {
    #[inline]
    fn from(tag: ErrorTag<E>) -> Self {
        Self { storage: tag.into() }
    }
}

impl<V, E> From<Storage<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(storage: Storage<V, E>) -> Self {
        Self { storage }
    }
}

impl<V, E> From<&Outcome<V, E>> for bool {
    /// `true` for a value, `false` for an error.
    #[inline]
    fn from(outcome: &Outcome<V, E>) -> Self {
        outcome.is_value()
    }
}
