//! Lazy, pull-based sequences.
//!
//! A [`Sequence`] is a chain of a leaf producer (a list of values, a
//! borrowed collection, an integer range, a generator) and operators
//! (`map`, `select`, `take`, `cycle`, ...). Building the chain computes
//! nothing; elements are produced one at a time when pulled, either with
//! [`Sequence::pull`], a terminal consumer such as
//! [`Sequence::any_match`], or by iterating.
//!
//! ```
//! use pullseq::Sequence;
//!
//! let evens: Vec<i64> = Sequence::iterate(0, |x| x + 1)
//!     .select(|x| x % 2 == 0)
//!     .drop(1)
//!     .take(3)
//!     .into_iter()
//!     .collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//! ```
//!
//! Any sequence can be restarted into an independent copy that replays it
//! from its start, which is what powers [`Sequence::cycle`]:
//!
//! ```
//! let mut letters = pullseq::Sequence::of(['a', 'b']).cycle(2);
//! letters.pull();
//! let replay: String = letters.restart().into_iter().collect();
//! assert_eq!(replay, "abab");
//! ```
//!
//! Sequences over one-shot iterators and generators cannot be replayed;
//! [`Sequence::restartability`] reports this for any chain.
//!
//! [`PairSequence`] is the same engine over `(A, B)` pairs, with operators
//! taking both components as arguments.

pub mod error;
mod pair;
mod sequence;

pub use error::{Error, Result};
pub use pair::PairSequence;
pub use sequence::{
    byte_range, closed_byte_range, closed_int_range, closed_long_range, closed_short_range,
    int_range, long_range, short_range, IntoIter, Iter, Pull, Restartability, Sequence,
    SizeBounds, Times,
};
