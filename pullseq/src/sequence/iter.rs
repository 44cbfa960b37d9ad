use std::iter::FusedIterator;

use super::core::Sequence;

/// A borrowing [`Iterator`] over a sequence, returned by
/// [`Sequence::iter`]. Elements it yields are gone from the sequence.
pub struct Iter<'s, 'a, T> {
    sequence: &'s mut Sequence<'a, T>,
}

impl<'s, 'a, T: 'a> Iterator for Iter<'s, 'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_bounds().into()
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'_, 'a, T> {}

/// An owning [`Iterator`] over a sequence.
pub struct IntoIter<'a, T> {
    sequence: Sequence<'a, T>,
}

impl<'a, T: 'a> Iterator for IntoIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_bounds().into()
    }
}

impl<'a, T: 'a> FusedIterator for IntoIter<'a, T> {}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Iterate over the remaining elements without giving up the sequence.
    pub fn iter(&mut self) -> Iter<'_, 'a, T> {
        Iter { sequence: self }
    }
}

impl<'a, T: 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = IntoIter<'a, T>;

    fn into_iter(self) -> IntoIter<'a, T> {
        IntoIter { sequence: self }
    }
}

impl<'s, 'a, T: 'a> IntoIterator for &'s mut Sequence<'a, T> {
    type Item = T;
    type IntoIter = Iter<'s, 'a, T>;

    fn into_iter(self) -> Iter<'s, 'a, T> {
        self.iter()
    }
}
