//! Compile-time guarantees derived from the payload types.
//!
//! Every field is computed from `V` and `E` alone, so the record for a given
//! `Storage<V, E>` is a constant. The layout figures are what the storage
//! costs. The `*_infallible` flags state which lifecycle operations run no
//! user code and therefore cannot panic:
//!
//! | operation | panic-free when |
//! |---|---|
//! | move (`take`, `take_from`, `replace`, relocation) | always: a bitwise move |
//! | destroy | neither payload has drop glue |
//! | drop step of copy/move assignment | neither payload has drop glue |
//! | copy / copy-assign | both payloads are `Copy` ([`Guarantees::trivial`]) |
//!
//! Default construction always runs `V::default()` and is never flagged.

use core::mem;

use super::Storage;

/// Layout and lifecycle properties of `Storage<V, E>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guarantees {
    /// `max(size_of::<V>(), size_of::<E>())`.
    pub payload_size: usize,
    /// `max(align_of::<V>(), align_of::<E>())`.
    pub payload_align: usize,
    /// Size of the whole storage, discriminant included.
    pub storage_size: usize,
    /// Alignment of the whole storage.
    pub storage_align: usize,
    /// Relocating the storage runs no user code.
    pub move_infallible: bool,
    /// Dropping the storage runs no user code.
    pub drop_infallible: bool,
    /// Overwriting the live payload during assignment runs no user code.
    pub assign_drop_infallible: bool,
    /// Copying the storage (and copy-assignment) runs no user code.
    pub copy_infallible: bool,
}

impl Guarantees {
    /// Computes the record for a `V`/`E` pair.
    ///
    /// Nothing is known about `Clone` here, so `copy_infallible` is `false`.
    pub const fn of<V, E>() -> Self {
        let no_drop_glue = !mem::needs_drop::<V>() && !mem::needs_drop::<E>();
        Self {
            payload_size: max(mem::size_of::<V>(), mem::size_of::<E>()),
            payload_align: max(mem::align_of::<V>(), mem::align_of::<E>()),
            storage_size: mem::size_of::<Storage<V, E>>(),
            storage_align: mem::align_of::<Storage<V, E>>(),
            move_infallible: true,
            drop_infallible: no_drop_glue,
            assign_drop_infallible: no_drop_glue,
            copy_infallible: false,
        }
    }

    /// Computes the record for the trivial path, where every operation is
    /// a bitwise copy.
    pub const fn trivial<V: Copy, E: Copy>() -> Self {
        let mut guarantees = Self::of::<V, E>();
        guarantees.copy_infallible = true;
        guarantees
    }

    /// Every lifecycle operation except default construction is panic-free.
    pub const fn is_trivial(&self) -> bool {
        self.move_infallible && self.drop_infallible && self.assign_drop_infallible && self.copy_infallible
    }

    /// Bytes spent on the discriminant and padding.
    ///
    /// Zero when the compiler can hide the discriminant in a niche of the
    /// larger payload (e.g. `Storage<Box<u8>, ()>`).
    pub const fn discriminant_overhead(&self) -> usize {
        self.storage_size - self.payload_size
    }
}

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}
