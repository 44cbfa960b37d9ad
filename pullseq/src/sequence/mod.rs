/// A sequence is a lazy chain of a leaf producer and operators. Elements are
/// produced one at a time, on demand, by pulling from the end of the chain.
mod bounds;
mod core;
mod creation;
mod iter;
mod operator;
mod terminal;
mod traits;
pub(crate) mod variant;

pub use bounds::SizeBounds;
pub use core::Sequence;
pub use creation::{
    byte_range, closed_byte_range, closed_int_range, closed_long_range, closed_short_range,
    int_range, long_range, short_range,
};
pub use iter::{IntoIter, Iter};
pub use operator::Times;
pub use traits::{Pull, Restartability};
