use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::sequence::{
    bounds::SizeBounds,
    core::Sequence,
    traits::{Pull, Restartability},
};

// every value emitted so far is kept, so memory grows with the number of
// distinct values seen
struct Unique<'a, T> {
    upstream: Sequence<'a, T>,
    seen: HashSet<T>,
}

impl<'a, T> Pull<'a, T> for Unique<'a, T>
where
    T: Eq + Hash + Clone + 'a,
{
    fn pull(&mut self) -> Option<T> {
        loop {
            let item = self.upstream.pull()?;
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }
    }

    fn restart(&self) -> Sequence<'a, T> {
        Sequence::from_pull(Unique {
            upstream: self.upstream.restart(),
            seen: HashSet::new(),
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        let bounds = self.upstream.size_bounds();
        // the next upstream element is only guaranteed new if nothing was
        // emitted yet
        let lower = if self.seen.is_empty() {
            bounds.lower().min(1)
        } else {
            0
        };
        SizeBounds::new(lower, bounds.upper())
    }

    fn restartability(&self) -> Restartability {
        self.upstream.restartability()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Skip every element equal to one already delivered.
    ///
    /// Order is preserved: each distinct value is delivered where it first
    /// appears.
    pub fn unique(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        Sequence::from_pull(Unique {
            upstream: self,
            seen: HashSet::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Sequence;

    #[test]
    fn test_unique() {
        let v: Vec<_> = Sequence::of([1, 1, 2, 3, 2]).unique().into_iter().collect();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_unique_over_infinite_with_finite_values() {
        let mut sequence = Sequence::iterate(0, |x| (x + 1) % 3).unique().take(3);
        assert_eq!(sequence.pull(), Some(0));
        assert_eq!(sequence.pull(), Some(1));
        assert_eq!(sequence.pull(), Some(2));
        assert_eq!(sequence.pull(), None);
    }

    #[test]
    fn test_unique_restart_forgets_seen_values() {
        let mut sequence = Sequence::of(["a", "b", "a"]).unique();
        while sequence.pull().is_some() {}
        let v: Vec<_> = sequence.restart().into_iter().collect();
        assert_eq!(v, vec!["a", "b"]);
    }
}
