use std::rc::Rc;

use num_traits::PrimInt;

use crate::error;

use super::{
    core::Sequence,
    variant::{Collection, OneShot, Range, Successors, Values},
};

impl<'a, T: 'a> Sequence<'a, T> {
    /// The sequence with no elements.
    pub fn empty() -> Self {
        Sequence::default()
    }

    /// A sequence of exactly one element.
    pub fn once(value: T) -> Self
    where
        T: Clone,
    {
        Sequence::of([value])
    }

    /// A sequence over a fixed list of values.
    ///
    /// The values are moved into shared storage; restarting the sequence
    /// does not copy them.
    pub fn of(values: impl Into<Rc<[T]>>) -> Self
    where
        T: Clone,
    {
        Sequence::from_pull(Values::new(values.into()))
    }

    /// A sequence over a borrowed slice, cloning each element as it is
    /// pulled.
    pub fn of_slice(values: &'a [T]) -> Self
    where
        T: Clone,
    {
        Sequence::from_pull(Values::new(values))
    }

    /// A sequence over any container that can be iterated by reference,
    /// such as a `Vec`, `VecDeque`, `BTreeSet` or `HashSet`.
    ///
    /// Restarting derives a fresh iterator from the container, so the
    /// sequence replays in the container's own iteration order.
    pub fn of_collection<C>(collection: &'a C) -> Self
    where
        C: ?Sized + 'a,
        &'a C: IntoIterator<Item = &'a T>,
        T: Clone,
    {
        Sequence::from_pull(Collection::new(collection))
    }

    /// A sequence over a one-shot iterator.
    ///
    /// The iterator cannot be replayed: the result reports
    /// [`Restartability::Shared`](crate::Restartability::Shared), and a
    /// restarted copy continues from wherever the iterator currently is.
    pub fn of_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Sequence::from_pull(OneShot::new(iter.into_iter()))
    }

    /// A sequence pulling from a generator until it first returns `None`.
    ///
    /// Like [`Sequence::of_iter`], a generator cannot be replayed.
    pub fn generate(generator: impl FnMut() -> Option<T> + 'a) -> Self {
        Sequence::of_iter(std::iter::from_fn(generator))
    }

    /// The infinite sequence `seed, f(seed), f(f(seed)), ...`.
    pub fn iterate(seed: T, f: impl Fn(&T) -> T + 'a) -> Self
    where
        T: Clone,
    {
        Sequence::successors(Some(seed), move |value| Some(f(value)))
    }

    /// The sequence starting at `first` where each following element is
    /// computed from the previous one, ending at the first `None`.
    pub fn successors(first: Option<T>, f: impl Fn(&T) -> Option<T> + 'a) -> Self
    where
        T: Clone,
    {
        Sequence::from_pull(Successors::new(first, f))
    }
}

impl<'a, T: PrimInt + 'a> Sequence<'a, T> {
    /// The integers in `[start, end)`.
    pub fn range(start: T, end: T) -> Self {
        Sequence::from_pull(Range::unit(start, end, false))
    }

    /// The integers in `[start, end]`.
    pub fn closed_range(start: T, end: T) -> Self {
        Sequence::from_pull(Range::unit(start, end, true))
    }

    /// Every `step`-th integer of `[start, end)`, counting down for a
    /// negative step.
    ///
    /// Fails with [`Error::ZeroStep`](error::Error::ZeroStep) when `step`
    /// is zero.
    pub fn range_by(start: T, end: T, step: T) -> error::Result<Self> {
        Ok(Sequence::from_pull(Range::new(start, end, step, false)?))
    }

    /// Every `step`-th integer of `[start, end]`, counting down for a
    /// negative step.
    pub fn closed_range_by(start: T, end: T, step: T) -> error::Result<Self> {
        Ok(Sequence::from_pull(Range::new(start, end, step, true)?))
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Sequence<'a, T> {
    fn from(values: Vec<T>) -> Self {
        Sequence::of(values)
    }
}

/// The `i8` values in `[start, end)`.
pub fn byte_range<'a>(start: i8, end: i8) -> Sequence<'a, i8> {
    Sequence::range(start, end)
}

/// The `i8` values in `[start, end]`.
pub fn closed_byte_range<'a>(start: i8, end: i8) -> Sequence<'a, i8> {
    Sequence::closed_range(start, end)
}

/// The `i16` values in `[start, end)`.
pub fn short_range<'a>(start: i16, end: i16) -> Sequence<'a, i16> {
    Sequence::range(start, end)
}

/// The `i16` values in `[start, end]`.
pub fn closed_short_range<'a>(start: i16, end: i16) -> Sequence<'a, i16> {
    Sequence::closed_range(start, end)
}

/// The `i32` values in `[start, end)`.
pub fn int_range<'a>(start: i32, end: i32) -> Sequence<'a, i32> {
    Sequence::range(start, end)
}

/// The `i32` values in `[start, end]`.
pub fn closed_int_range<'a>(start: i32, end: i32) -> Sequence<'a, i32> {
    Sequence::closed_range(start, end)
}

/// The `i64` values in `[start, end)`.
pub fn long_range<'a>(start: i64, end: i64) -> Sequence<'a, i64> {
    Sequence::range(start, end)
}

/// The `i64` values in `[start, end]`.
pub fn closed_long_range<'a>(start: i64, end: i64) -> Sequence<'a, i64> {
    Sequence::closed_range(start, end)
}
