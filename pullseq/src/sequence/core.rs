// The node type is a closed enum over the operators that keep the element
// type unchanged, so pulling through a chain of them is a match per link
// rather than a virtual call. Leaf producers, and operators that change the
// element type or need extra bounds on it (map, enumerate, unique), enter
// the enum behind a boxed `Pull` in the `Source` variant.

// creation.rs contains the constructors
// operator/ contains the state of each operator and the methods building it
// terminal.rs contains the consuming folds

use std::fmt;

use super::{
    bounds::SizeBounds,
    operator::{Cycle, DropCount, DropWhile, Filter, Inspect, TakeCount, TakeWhile},
    traits::{Pull, Restartability},
};

/// A lazy, possibly infinite sequence of elements produced on demand.
///
/// A sequence is built from a leaf producer and a chain of operators; nothing
/// is computed until elements are pulled, one at a time, by [`pull`] or one
/// of the terminal consumers.
///
/// [`pull`]: Sequence::pull
pub struct Sequence<'a, T> {
    node: Node<'a, T>,
}

pub(crate) enum Node<'a, T> {
    Empty,
    Source(Box<dyn Pull<'a, T> + 'a>),
    Filter(Filter<'a, T>),
    Inspect(Inspect<'a, T>),
    DropCount(DropCount<'a, T>),
    TakeCount(TakeCount<'a, T>),
    DropWhile(DropWhile<'a, T>),
    TakeWhile(TakeWhile<'a, T>),
    Cycle(Cycle<'a, T>),
}

impl<'a, T: 'a> Sequence<'a, T> {
    pub(crate) fn from_node(node: Node<'a, T>) -> Self {
        Sequence { node }
    }

    /// Wrap a custom producer.
    pub fn from_pull(pull: impl Pull<'a, T> + 'a) -> Self {
        Sequence::from_node(Node::Source(Box::new(pull)))
    }

    /// Produce the next element, or `None` once the sequence is exhausted.
    ///
    /// Exhaustion is permanent: after the first `None`, every further pull
    /// returns `None` too.
    pub fn pull(&mut self) -> Option<T> {
        match &mut self.node {
            Node::Empty => None,
            Node::Source(inner) => inner.pull(),
            Node::Filter(inner) => inner.pull(),
            Node::Inspect(inner) => inner.pull(),
            Node::DropCount(inner) => inner.pull(),
            Node::TakeCount(inner) => inner.pull(),
            Node::DropWhile(inner) => inner.pull(),
            Node::TakeWhile(inner) => inner.pull(),
            Node::Cycle(inner) => inner.pull(),
        }
    }

    /// Build a fresh copy of this chain that starts over at its logical
    /// start, however far this one has been pulled.
    ///
    /// Chains rooted in a one-shot source (see [`Sequence::restartability`])
    /// cannot be replayed; their restarted copy shares that source's
    /// position.
    pub fn restart(&self) -> Self {
        match &self.node {
            Node::Empty => Sequence::empty(),
            Node::Source(inner) => inner.restart(),
            Node::Filter(inner) => Sequence::from_node(Node::Filter(inner.restart())),
            Node::Inspect(inner) => Sequence::from_node(Node::Inspect(inner.restart())),
            Node::DropCount(inner) => Sequence::from_node(Node::DropCount(inner.restart())),
            Node::TakeCount(inner) => Sequence::from_node(Node::TakeCount(inner.restart())),
            Node::DropWhile(inner) => Sequence::from_node(Node::DropWhile(inner.restart())),
            Node::TakeWhile(inner) => Sequence::from_node(Node::TakeWhile(inner.restart())),
            Node::Cycle(inner) => Sequence::from_node(Node::Cycle(inner.restart())),
        }
    }

    /// Bounds on the number of elements left to pull.
    pub fn size_bounds(&self) -> SizeBounds {
        match &self.node {
            Node::Empty => SizeBounds::exact(0),
            Node::Source(inner) => inner.size_bounds(),
            Node::Filter(inner) => inner.size_bounds(),
            Node::Inspect(inner) => inner.size_bounds(),
            Node::DropCount(inner) => inner.size_bounds(),
            Node::TakeCount(inner) => inner.size_bounds(),
            Node::DropWhile(inner) => inner.size_bounds(),
            Node::TakeWhile(inner) => inner.size_bounds(),
            Node::Cycle(inner) => inner.size_bounds(),
        }
    }

    /// Whether [`restart`](Sequence::restart) replays this chain
    /// independently. A chain is only as restartable as its leaf producer.
    pub fn restartability(&self) -> Restartability {
        match &self.node {
            Node::Empty => Restartability::Independent,
            Node::Source(inner) => inner.restartability(),
            Node::Filter(inner) => inner.upstream().restartability(),
            Node::Inspect(inner) => inner.upstream().restartability(),
            Node::DropCount(inner) => inner.upstream().restartability(),
            Node::TakeCount(inner) => inner.upstream().restartability(),
            Node::DropWhile(inner) => inner.upstream().restartability(),
            Node::TakeWhile(inner) => inner.upstream().restartability(),
            Node::Cycle(inner) => inner.template().restartability(),
        }
    }

    pub fn is_restartable(&self) -> bool {
        self.restartability().is_independent()
    }
}

impl<T> Default for Sequence<'_, T> {
    fn default() -> Self {
        Sequence { node: Node::Empty }
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            Node::Empty => f.write_str("Empty"),
            Node::Source(_) => f.write_str("Source"),
            Node::Filter(inner) => fmt::Debug::fmt(inner, f),
            Node::Inspect(inner) => fmt::Debug::fmt(inner, f),
            Node::DropCount(inner) => fmt::Debug::fmt(inner, f),
            Node::TakeCount(inner) => fmt::Debug::fmt(inner, f),
            Node::DropWhile(inner) => fmt::Debug::fmt(inner, f),
            Node::TakeWhile(inner) => fmt::Debug::fmt(inner, f),
            Node::Cycle(inner) => fmt::Debug::fmt(inner, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_default_is_empty() {
        let mut sequence: Sequence<i32> = Sequence::default();
        assert_eq!(sequence.pull(), None);
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(0));
        assert!(sequence.is_restartable());
    }

    #[test]
    fn test_debug_shows_chain() {
        let sequence = crate::int_range(0, 10)
            .select(|x| x % 2 == 0)
            .drop(2)
            .take(3);
        assert_snapshot!(
            format!("{:?}", sequence),
            @"Take { count: 3, taken: 0, upstream: Drop { count: 2, phase: Open, upstream: Select { upstream: Source, .. } } }"
        );
    }

    #[test]
    fn test_debug_after_pull() {
        let mut sequence = Sequence::of([1, 2, 3]).drop_while(|x| *x < 2).take(2);
        sequence.pull();
        assert_snapshot!(
            format!("{:?}", sequence),
            @"Take { count: 2, taken: 1, upstream: DropWhile { phase: Settled, upstream: Source, .. } }"
        );
    }
}
