//! Payload storage - the memory owner behind [`Outcome`](crate::Outcome).
//!
//! `Storage<V, E>` holds exactly one live payload, either a `V` or an `E`, in a
//! single block sized and aligned for the larger of the two, together with the
//! discriminant naming which one is live.
//!
//! ## Core invariant
//! After any constructor or mutating operation completes, exactly one payload is
//! alive and the discriminant names it. Because the storage is a native enum the
//! compiler enforces "construct before read, drop exactly once"; reading the
//! inactive side is not expressible and the accessors return `None` instead.
//!
//! ## Two paths
//! - **General**: any `V`, `E`. Drop and clone glue run only for the live
//!   payload. [`Storage::clone_from`] reuses the live payload in place when the
//!   source has the same variant.
//! - **Trivial**: `V: Copy, E: Copy`. The storage itself is `Copy`, has no drop
//!   glue, and [`Storage::assign`] is a bitwise copy.
//!
//! ## Moving out of a place
//! Rust moves are destructive, so a moved-from storage can only be observed
//! after [`Storage::take`] or [`Storage::take_from`]. Both leave the source
//! holding a freshly constructed `V::default()` in the value variant. The
//! source therefore reports `is_value()` whatever it held before, and that
//! value is live and readable.

mod guarantee;


pub use guarantee::Guarantees;

use core::fmt;
use core::mem;

use crate::tag::{ErrorTag, ValueTag};

macro_rules! trace_transition {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "outcome::storage", $($arg)*);
    };
}

/// Which payload a storage currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// The success payload is live.
    Value,
    /// The error payload is live.
    Error,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Value => f.write_str("value"),
            Variant::Error => f.write_str("error"),
        }
    }
}

/// Discriminated storage for a `V` or an `E`.
#[derive(Debug, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Storage<V, E> {
    /// Success payload.
    Value(V),
    /// Error payload.
    Error(E),
}

impl<V, E> Storage<V, E> {
    /// Layout and lifecycle guarantees for this `V`/`E` pair.
    pub const GUARANTEES: Guarantees = Guarantees::of::<V, E>();

    /// Returns `true` if the value payload is live.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Storage::Value(_))
    }

    /// Returns `true` if the error payload is live.
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_value()
    }

    /// Returns the discriminant.
    #[inline]
    pub const fn variant(&self) -> Variant {
        match self {
            Storage::Value(_) => Variant::Value,
            Storage::Error(_) => Variant::Error,
        }
    }

    /// Borrows the value payload, if live.
    #[inline]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Storage::Value(v) => Some(v),
            Storage::Error(_) => None,
        }
    }

    /// Mutably borrows the value payload, if live.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Storage::Value(v) => Some(v),
            Storage::Error(_) => None,
        }
    }

    /// Moves the value payload out, dropping an error payload.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Storage::Value(v) => Some(v),
            Storage::Error(_) => None,
        }
    }

    /// Borrows the error payload, if live.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Storage::Value(_) => None,
            Storage::Error(e) => Some(e),
        }
    }

    /// Mutably borrows the error payload, if live.
    #[inline]
    pub fn error_mut(&mut self) -> Option<&mut E> {
        match self {
            Storage::Value(_) => None,
            Storage::Error(e) => Some(e),
        }
    }

    /// Moves the error payload out, dropping a value payload.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Storage::Value(_) => None,
            Storage::Error(e) => Some(e),
        }
    }

    /// Borrows whichever payload is live.
    #[inline]
    pub const fn as_ref(&self) -> Storage<&V, &E> {
        match self {
            Storage::Value(v) => Storage::Value(v),
            Storage::Error(e) => Storage::Error(e),
        }
    }

    /// Mutably borrows whichever payload is live.
    #[inline]
    pub fn as_mut(&mut self) -> Storage<&mut V, &mut E> {
        match self {
            Storage::Value(v) => Storage::Value(v),
            Storage::Error(e) => Storage::Error(e),
        }
    }

    /// Consumes the storage, handing the live payload to `on_value` or `on_error`.
    #[inline]
    pub fn fold<R>(self, on_value: impl FnOnce(V) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Storage::Value(v) => on_value(v),
            Storage::Error(e) => on_error(e),
        }
    }

    /// Installs `next`, returning the payload it displaced.
    #[inline]
    pub fn replace(&mut self, next: Self) -> Self {
        trace_transition!(from = %self.variant(), to = %next.variant(), "replace");
        mem::replace(self, next)
    }

    /// Moves the live payload out, leaving `V::default()` behind.
    ///
    /// The source always ends in the value variant, including when it held an
    /// error. Its new value is fully constructed, so reading it afterwards is
    /// sound.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        V: Default,
    {
        trace_transition!(from = %self.variant(), "take resets source to default value");
        mem::replace(self, Storage::Value(V::default()))
    }

    /// Drops the current payload and adopts `source`'s, resetting `source` as
    /// [`take`](Self::take) does.
    #[inline]
    pub fn take_from(&mut self, source: &mut Self)
    where
        V: Default,
    {
        *self = source.take();
    }
}

impl<V: Copy, E: Copy> Storage<V, E> {
    /// Guarantees of the trivial path: every operation is a bitwise copy.
    pub const TRIVIAL_GUARANTEES: Guarantees = Guarantees::trivial::<V, E>();

    /// Bitwise copy-assignment for trivially copyable payloads.
    ///
    /// Nothing is dropped: neither payload has drop glue.
    #[inline]
    pub fn assign(&mut self, source: &Self) {
        *self = *source;
    }
}

impl<V: Default, E> Default for Storage<V, E> {
    #[inline]
    fn default() -> Self {
        Storage::Value(V::default())
    }
}

// Hand-written so that `clone_from` can reuse the live payload in place.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<V: Clone, E: Clone> Clone for Storage<V, E> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Storage::Value(v) => Storage::Value(v.clone()),
            Storage::Error(e) => Storage::Error(e.clone()),
        }
    }

    /// Copy-assignment.
    ///
    /// Same variant: the live payload is updated in place through its own
    /// `clone_from`, which lets owning payloads keep their allocation.
    /// Different variant: the replacement is cloned first and only then is the
    /// old payload dropped, so a panicking `Clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Storage::Value(dst), Storage::Value(src)) => dst.clone_from(src),
            (Storage::Error(dst), Storage::Error(src)) => dst.clone_from(src),
            (dst, src) => {
                trace_transition!(from = %dst.variant(), to = %src.variant(), "clone_from switches variant");
                *dst = src.clone();
            }
        }
    }
}

impl<V, E> From<ValueTag<V>> for Storage<V, E> {
    #[inline]
    fn from(tag: ValueTag<V>) -> Self {
        Storage::Value(tag.0)
    }
}

impl<V, E> From<ErrorTag<E>> for Storage<V, E> {
    #[inline]
    fn from(tag: ErrorTag<E>) -> Self {
        Storage::Error(tag.0)
    }
}
