//! # `outcome` - Value-or-Error Container
//!
//! A generic two-variant container, [`Outcome<V, E>`], holding either a success
//! value `V` or an error `E`, together with combinators (`map`, `map_error`,
//! `and_then`, `or_else`, `join`) for building pipelines of fallible steps
//! without branching on success or failure at every step.
//!
//! ## Guarantees
//!
//! ### Memory Safety
//! - **Exactly one live payload**: the storage is a native enum, so the
//!   compiler enforces "construct before read, drop exactly once". Reading the
//!   inactive payload is not expressible; accessors return `None` instead.
//! - **Total accessors**: `value()` and `error()` return `Option`, never a
//!   reference to the wrong side.
//! - **Defined moved-from state**: [`Outcome::take`] leaves the source holding a
//!   live `V::default()` rather than an unreadable remnant.
//!
//! ### Capability Gating
//! - Copying accessors need `V: Clone, E: Clone`; moving accessors need nothing.
//! - `join()` exists only when both sides share a type.
//! - `Outcome<V, E>` is `Copy` exactly when `V` and `E` are.
//!
//! ## Architecture
//!
//! Stratified design, leaves first:
//!
//! 1. **Tags** ([`ValueTag`], [`ErrorTag`]): disambiguate construction intent
//!    when `V` and `E` are the same type.
//! 2. **Storage** ([`storage::Storage`]): owns the payload and discriminant,
//!    implements copy/take/assign lifecycle and records compile-time
//!    [`storage::Guarantees`].
//! 3. **Outcome** ([`Outcome`]): the public sum type and its combinators.
//!
//! ## Features
//!
//! - `tracing`: storage transitions that switch or reset the discriminant emit
//!   `trace` events under the `outcome::storage` target.
//! - `proptest`: exports [`strategy::arb_outcome`].
//!
//! ## Example
//!
//! ```rust
//! use outcome::{make_error, make_value, Outcome};
//!
//! let parse = |s: &str| -> Outcome<i32, String> {
//!     match s.parse::<i32>() {
//!         Ok(n) => make_value(n).into(),
//!         Err(e) => make_error(e.to_string()).into(),
//!     }
//! };
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.value(), Some(42));
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_error());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod outcome;
pub mod storage;
pub mod tag;

#[cfg(feature = "proptest")]
pub mod strategy;

pub use outcome::{Outcome, VariantError};
pub use storage::{Guarantees, Variant};
pub use tag::{make_error, make_value, ErrorTag, ValueTag};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tags add nothing.
    assert!(mem::size_of::<ValueTag<u64>>() == mem::size_of::<u64>());
    assert!(mem::size_of::<ErrorTag<u64>>() == mem::size_of::<u64>());

    // `Outcome` is `repr(transparent)` over its storage.
    assert!(mem::size_of::<Outcome<u64, u32>>() == mem::size_of::<storage::Storage<u64, u32>>());
    assert!(mem::align_of::<Outcome<u64, u32>>() == mem::align_of::<storage::Storage<u64, u32>>());

    // Storage is sized for the larger payload plus at most one aligned discriminant word.
    assert!(mem::size_of::<Outcome<u64, u8>>() <= 2 * mem::size_of::<u64>());
    assert!(mem::align_of::<Outcome<u64, u8>>() == mem::align_of::<u64>());

    // Niches absorb the discriminant for pointer payloads.
    assert!(mem::size_of::<Outcome<Box<u8>, ()>>() == mem::size_of::<Box<u8>>());

    // Moves never run user code.
    assert!(storage::Storage::<String, Vec<u8>>::GUARANTEES.move_infallible);

    // Owning payloads may run user code on drop and on the drop step of assignment.
    assert!(!storage::Storage::<String, u8>::GUARANTEES.drop_infallible);
    assert!(!storage::Storage::<String, u8>::GUARANTEES.assign_drop_infallible);

    // The trivial path is panic-free end to end.
    assert!(storage::Storage::<u32, i64>::TRIVIAL_GUARANTEES.is_trivial());
    assert!(!storage::Storage::<u32, i64>::GUARANTEES.copy_infallible);
};
