/// Sequences of two-element tuples, with operators taking the two
/// components as separate arguments.
mod core;
mod creation;

pub use core::PairSequence;
