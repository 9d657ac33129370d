//! `proptest` strategies for [`Outcome`].
//!
//! Enabled by the `proptest` feature so downstream crates can property-test
//! their own pipelines.

use proptest::prelude::*;

use crate::Outcome;

/// Generates outcomes with both sides equally likely.
pub fn arb_outcome<V, E>(
    value: impl Strategy<Value = V> + 'static,
    error: impl Strategy<Value = E> + 'static,
) -> BoxedStrategy<Outcome<V, E>>
where
    V: core::fmt::Debug + 'static,
    E: core::fmt::Debug + 'static,
{
    prop_oneof![
        value.prop_map(Outcome::<V, E>::from_value),
        error.prop_map(Outcome::<V, E>::from_error),
    ]
    .boxed()
}
