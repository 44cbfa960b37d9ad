use std::{fmt, rc::Rc};

use crate::sequence::{
    bounds::SizeBounds,
    core::{Node, Sequence},
};

use super::Predicate;

pub(crate) struct Filter<'a, T> {
    upstream: Box<Sequence<'a, T>>,
    predicate: Predicate<'a, T>,
    // whether elements passing the predicate are kept (select) or
    // discarded (reject)
    keep: bool,
}

impl<'a, T: 'a> Filter<'a, T> {
    pub(crate) fn upstream(&self) -> &Sequence<'a, T> {
        &self.upstream
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        loop {
            let item = self.upstream.pull()?;
            if (self.predicate)(&item) == self.keep {
                return Some(item);
            }
        }
    }

    pub(crate) fn restart(&self) -> Self {
        Filter {
            upstream: Box::new(self.upstream.restart()),
            predicate: Rc::clone(&self.predicate),
            keep: self.keep,
        }
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        self.upstream.size_bounds().relax()
    }
}

impl<T> fmt::Debug for Filter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.keep { "Select" } else { "Reject" };
        f.debug_struct(name)
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Keep only the elements passing `predicate`.
    ///
    /// Pulling loops over the upstream until an element passes, so selecting
    /// from an infinite sequence where nothing ever passes never returns.
    pub fn select(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.filter_by(Rc::new(predicate), true)
    }

    /// Keep only the elements failing `predicate`.
    pub fn reject(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.filter_by(Rc::new(predicate), false)
    }

    fn filter_by(self, predicate: Predicate<'a, T>, keep: bool) -> Self {
        Sequence::from_node(Node::Filter(Filter {
            upstream: Box::new(self),
            predicate,
            keep,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{int_range, Sequence};

    #[test]
    fn test_select() {
        let v: Vec<_> = int_range(0, 5).select(|x| x % 2 == 0).into_iter().collect();
        assert_eq!(v, vec![0, 2, 4]);
    }

    #[test]
    fn test_reject() {
        let v: Vec<_> = int_range(0, 5).reject(|x| x % 2 == 0).into_iter().collect();
        assert_eq!(v, vec![1, 3]);
    }

    #[test]
    fn test_select_then_reject_same_predicate_is_empty() {
        let mut sequence = Sequence::of([3, 8, 1, 9, 4])
            .select(|x| *x > 3)
            .select(|x| *x <= 3);
        assert_eq!(sequence.pull(), None);
    }

    #[test]
    fn test_select_bounds_keep_upper() {
        let sequence = int_range(0, 5).select(|x| *x > 2);
        assert_eq!(sequence.size_bounds().lower(), 0);
        assert_eq!(sequence.size_bounds().upper(), Some(5));
    }
}
