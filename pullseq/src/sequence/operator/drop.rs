use std::{fmt, rc::Rc};

use crate::sequence::{
    bounds::SizeBounds,
    core::{Node, Sequence},
};

use super::{Phase, Predicate};

pub(crate) struct DropCount<'a, T> {
    upstream: Box<Sequence<'a, T>>,
    count: usize,
    phase: Phase,
}

impl<'a, T: 'a> DropCount<'a, T> {
    pub(crate) fn upstream(&self) -> &Sequence<'a, T> {
        &self.upstream
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        if self.phase == Phase::Open {
            self.phase = Phase::Settled;
            for _ in 0..self.count {
                // an upstream ending early stays ended
                self.upstream.pull()?;
            }
        }
        self.upstream.pull()
    }

    pub(crate) fn restart(&self) -> Self {
        DropCount {
            upstream: Box::new(self.upstream.restart()),
            count: self.count,
            phase: Phase::Open,
        }
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        match self.phase {
            Phase::Open => self.upstream.size_bounds().skip(self.count),
            Phase::Settled => self.upstream.size_bounds(),
        }
    }
}

impl<T> fmt::Debug for DropCount<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drop")
            .field("count", &self.count)
            .field("phase", &self.phase)
            .field("upstream", &self.upstream)
            .finish()
    }
}

pub(crate) struct DropWhile<'a, T> {
    upstream: Box<Sequence<'a, T>>,
    predicate: Predicate<'a, T>,
    // the predicate outcome that gets an element dropped: `true` for
    // drop_while, `false` for drop_until
    drop_on: bool,
    phase: Phase,
}

impl<'a, T: 'a> DropWhile<'a, T> {
    pub(crate) fn upstream(&self) -> &Sequence<'a, T> {
        &self.upstream
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        match self.phase {
            Phase::Settled => self.upstream.pull(),
            Phase::Open => {
                self.phase = Phase::Settled;
                loop {
                    let item = self.upstream.pull()?;
                    if (self.predicate)(&item) != self.drop_on {
                        return Some(item);
                    }
                }
            }
        }
    }

    pub(crate) fn restart(&self) -> Self {
        DropWhile {
            upstream: Box::new(self.upstream.restart()),
            predicate: Rc::clone(&self.predicate),
            drop_on: self.drop_on,
            phase: Phase::Open,
        }
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        match self.phase {
            Phase::Open => self.upstream.size_bounds().relax(),
            Phase::Settled => self.upstream.size_bounds(),
        }
    }
}

impl<T> fmt::Debug for DropWhile<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.drop_on { "DropWhile" } else { "DropUntil" };
        f.debug_struct(name)
            .field("phase", &self.phase)
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Discard the first `count` elements.
    ///
    /// The elements are discarded on the first pull; if the upstream has
    /// fewer, the result is empty.
    pub fn drop(self, count: usize) -> Self {
        Sequence::from_node(Node::DropCount(DropCount {
            upstream: Box::new(self),
            count,
            phase: Phase::Open,
        }))
    }

    /// Discard leading elements while they pass `predicate`.
    ///
    /// The first element failing it is returned and everything after it is
    /// passed through: later elements passing `predicate` are not dropped.
    pub fn drop_while(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.drop_by(Rc::new(predicate), true)
    }

    /// Discard leading elements until one passes `predicate`.
    ///
    /// That element is returned and everything after it is passed through.
    pub fn drop_until(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.drop_by(Rc::new(predicate), false)
    }

    fn drop_by(self, predicate: Predicate<'a, T>, drop_on: bool) -> Self {
        Sequence::from_node(Node::DropWhile(DropWhile {
            upstream: Box::new(self),
            predicate,
            drop_on,
            phase: Phase::Open,
        }))
    }
}
