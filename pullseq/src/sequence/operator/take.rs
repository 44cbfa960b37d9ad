use std::{fmt, rc::Rc};

use crate::sequence::{
    bounds::SizeBounds,
    core::{Node, Sequence},
};

use super::{Phase, Predicate};

pub(crate) struct TakeCount<'a, T> {
    upstream: Box<Sequence<'a, T>>,
    count: usize,
    taken: usize,
}

impl<'a, T: 'a> TakeCount<'a, T> {
    pub(crate) fn upstream(&self) -> &Sequence<'a, T> {
        &self.upstream
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        if self.taken >= self.count {
            // the upstream is not pulled any further
            return None;
        }
        let item = self.upstream.pull();
        if item.is_some() {
            self.taken += 1;
        }
        item
    }

    pub(crate) fn restart(&self) -> Self {
        TakeCount {
            upstream: Box::new(self.upstream.restart()),
            count: self.count,
            taken: 0,
        }
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        self.upstream
            .size_bounds()
            .at_most(self.count - self.taken)
    }
}

impl<T> fmt::Debug for TakeCount<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Take")
            .field("count", &self.count)
            .field("taken", &self.taken)
            .field("upstream", &self.upstream)
            .finish()
    }
}

pub(crate) struct TakeWhile<'a, T> {
    upstream: Box<Sequence<'a, T>>,
    predicate: Predicate<'a, T>,
    // the predicate outcome that keeps the operator taking: `true` for
    // take_while, `false` for take_until
    take_on: bool,
    phase: Phase,
}

impl<'a, T: 'a> TakeWhile<'a, T> {
    pub(crate) fn upstream(&self) -> &Sequence<'a, T> {
        &self.upstream
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        if self.phase == Phase::Settled {
            return None;
        }
        match self.upstream.pull() {
            Some(item) if (self.predicate)(&item) == self.take_on => Some(item),
            _ => {
                self.phase = Phase::Settled;
                None
            }
        }
    }

    pub(crate) fn restart(&self) -> Self {
        TakeWhile {
            upstream: Box::new(self.upstream.restart()),
            predicate: Rc::clone(&self.predicate),
            take_on: self.take_on,
            phase: Phase::Open,
        }
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        match self.phase {
            Phase::Open => self.upstream.size_bounds().relax(),
            Phase::Settled => SizeBounds::exact(0),
        }
    }
}

impl<T> fmt::Debug for TakeWhile<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.take_on { "TakeWhile" } else { "TakeUntil" };
        f.debug_struct(name)
            .field("phase", &self.phase)
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Deliver at most `count` elements.
    ///
    /// Once `count` elements went out the sequence ends, and the upstream is
    /// never pulled again. This is the usual way to bound an infinite
    /// sequence.
    pub fn take(self, count: usize) -> Self {
        Sequence::from_node(Node::TakeCount(TakeCount {
            upstream: Box::new(self),
            count,
            taken: 0,
        }))
    }

    /// Deliver elements while they pass `predicate`.
    ///
    /// The first failing element is consumed but not delivered, and the
    /// sequence ends for good, even if later elements would pass.
    pub fn take_while(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.take_by(Rc::new(predicate), true)
    }

    /// Deliver elements until one passes `predicate`.
    ///
    /// That element is consumed but not delivered, and the sequence ends for
    /// good.
    pub fn take_until(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.take_by(Rc::new(predicate), false)
    }

    fn take_by(self, predicate: Predicate<'a, T>, take_on: bool) -> Self {
        Sequence::from_node(Node::TakeWhile(TakeWhile {
            upstream: Box::new(self),
            predicate,
            take_on,
            phase: Phase::Open,
        }))
    }
}
