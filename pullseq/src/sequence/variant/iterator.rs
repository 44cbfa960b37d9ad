use std::{cell::RefCell, iter::Fuse, rc::Rc};

use crate::sequence::{
    bounds::SizeBounds,
    core::Sequence,
    traits::{Pull, Restartability},
};

// A one-shot iterator. It cannot be replayed, so every restart hands out
// another handle onto the same iterator; all handles advance it together.
pub(crate) struct OneShot<I> {
    iter: Rc<RefCell<Fuse<I>>>,
}

impl<I: Iterator> OneShot<I> {
    pub(crate) fn new(iter: I) -> Self {
        OneShot {
            iter: Rc::new(RefCell::new(iter.fuse())),
        }
    }
}

impl<'a, I> Pull<'a, I::Item> for OneShot<I>
where
    I: Iterator + 'a,
    I::Item: 'a,
{
    fn pull(&mut self) -> Option<I::Item> {
        self.iter.borrow_mut().next()
    }

    fn restart(&self) -> Sequence<'a, I::Item> {
        tracing::debug!(
            handles = Rc::strong_count(&self.iter) + 1,
            "restarting a one-shot source shares its position"
        );
        Sequence::from_pull(OneShot {
            iter: Rc::clone(&self.iter),
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        let (lower, upper) = self.iter.borrow().size_hint();
        SizeBounds::new(lower, upper)
    }

    fn restartability(&self) -> Restartability {
        Restartability::Shared
    }
}

#[cfg(test)]
mod tests {
    use crate::{Restartability, Sequence};

    #[test]
    fn test_restart_shares_position() {
        let mut sequence = Sequence::of_iter(vec![1, 2, 3, 4]);
        assert_eq!(sequence.pull(), Some(1));
        let mut restarted = sequence.restart();
        assert_eq!(restarted.pull(), Some(2));
        assert_eq!(sequence.pull(), Some(3));
        assert_eq!(sequence.restartability(), Restartability::Shared);
    }

    #[test]
    fn test_shared_through_operators() {
        let sequence = Sequence::of_iter(0..10).select(|x| x % 2 == 0).take(2);
        assert!(!sequence.is_restartable());
    }

    #[test]
    fn test_generate_ends_at_first_none() {
        let mut n = 0;
        let mut sequence = Sequence::generate(move || {
            n += 1;
            // resumes after the first end, which must not be observed
            if n == 3 {
                None
            } else {
                Some(n)
            }
        });
        assert_eq!(sequence.pull(), Some(1));
        assert_eq!(sequence.pull(), Some(2));
        assert_eq!(sequence.pull(), None);
        assert_eq!(sequence.pull(), None);
    }
}
