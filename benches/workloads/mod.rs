pub mod pipeline;
pub mod trivial;
