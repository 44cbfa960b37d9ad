use std::rc::Rc;

use crate::sequence::{
    bounds::SizeBounds,
    core::Sequence,
    traits::{Pull, Restartability},
};

struct Map<'a, T, F> {
    upstream: Sequence<'a, T>,
    f: Rc<F>,
}

impl<'a, T, R, F> Pull<'a, R> for Map<'a, T, F>
where
    T: 'a,
    R: 'a,
    F: Fn(T) -> R + 'a,
{
    fn pull(&mut self) -> Option<R> {
        self.upstream.pull().map(|item| (self.f)(item))
    }

    fn restart(&self) -> Sequence<'a, R> {
        Sequence::from_pull(Map {
            upstream: self.upstream.restart(),
            f: Rc::clone(&self.f),
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        self.upstream.size_bounds()
    }

    fn restartability(&self) -> Restartability {
        self.upstream.restartability()
    }
}

struct MapWhile<'a, T, F> {
    upstream: Sequence<'a, T>,
    f: Rc<F>,
    done: bool,
}

impl<'a, T, R, F> Pull<'a, R> for MapWhile<'a, T, F>
where
    T: 'a,
    R: 'a,
    F: Fn(T) -> Option<R> + 'a,
{
    fn pull(&mut self) -> Option<R> {
        if self.done {
            return None;
        }
        let mapped = self.upstream.pull().and_then(|item| (self.f)(item));
        if mapped.is_none() {
            self.done = true;
        }
        mapped
    }

    fn restart(&self) -> Sequence<'a, R> {
        Sequence::from_pull(MapWhile {
            upstream: self.upstream.restart(),
            f: Rc::clone(&self.f),
            done: false,
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        if self.done {
            SizeBounds::exact(0)
        } else {
            self.upstream.size_bounds().relax()
        }
    }

    fn restartability(&self) -> Restartability {
        self.upstream.restartability()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Transform each element with `f`.
    pub fn map<R: 'a>(self, f: impl Fn(T) -> R + 'a) -> Sequence<'a, R> {
        Sequence::from_pull(Map {
            upstream: self,
            f: Rc::new(f),
        })
    }

    /// Transform each element with `f`, ending the sequence the first time
    /// `f` returns `None`.
    ///
    /// The end is permanent: later upstream elements are never looked at.
    pub fn map_while<R: 'a>(self, f: impl Fn(T) -> Option<R> + 'a) -> Sequence<'a, R> {
        Sequence::from_pull(MapWhile {
            upstream: self,
            f: Rc::new(f),
            done: false,
        })
    }
}
