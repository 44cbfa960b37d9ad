use std::iter::Fuse;

use crate::sequence::{bounds::SizeBounds, core::Sequence, traits::Pull};

// A borrowed container iterable by reference. The borrow keeps the container
// alive and unchanged for as long as the sequence exists, so a restart can
// always derive a fresh cursor from it.
pub(crate) struct Collection<'a, C>
where
    C: ?Sized + 'a,
    &'a C: IntoIterator,
{
    container: &'a C,
    iter: Fuse<<&'a C as IntoIterator>::IntoIter>,
}

impl<'a, C> Collection<'a, C>
where
    C: ?Sized + 'a,
    &'a C: IntoIterator,
{
    pub(crate) fn new(container: &'a C) -> Self {
        Collection {
            container,
            iter: container.into_iter().fuse(),
        }
    }
}

impl<'a, C, T> Pull<'a, T> for Collection<'a, C>
where
    C: ?Sized + 'a,
    &'a C: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
{
    fn pull(&mut self) -> Option<T> {
        self.iter.next().cloned()
    }

    fn restart(&self) -> Sequence<'a, T> {
        Sequence::from_pull(Collection::new(self.container))
    }

    fn size_bounds(&self) -> SizeBounds {
        let (lower, upper) = self.iter.size_hint();
        SizeBounds::new(lower, upper)
    }
}

// The key/value pairs of a borrowed map, cloned out of it.
pub(crate) struct Entries<'a, M>
where
    M: ?Sized + 'a,
    &'a M: IntoIterator,
{
    map: &'a M,
    iter: Fuse<<&'a M as IntoIterator>::IntoIter>,
}

impl<'a, M> Entries<'a, M>
where
    M: ?Sized + 'a,
    &'a M: IntoIterator,
{
    pub(crate) fn new(map: &'a M) -> Self {
        Entries {
            map,
            iter: map.into_iter().fuse(),
        }
    }
}

impl<'a, M, K, V> Pull<'a, (K, V)> for Entries<'a, M>
where
    M: ?Sized + 'a,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    fn pull(&mut self) -> Option<(K, V)> {
        let (key, value) = self.iter.next()?;
        Some((key.clone(), value.clone()))
    }

    fn restart(&self) -> Sequence<'a, (K, V)> {
        Sequence::from_pull(Entries::new(self.map))
    }

    fn size_bounds(&self) -> SizeBounds {
        let (lower, upper) = self.iter.size_hint();
        SizeBounds::new(lower, upper)
    }
}
