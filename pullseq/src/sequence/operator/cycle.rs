use std::fmt;

use crate::{
    error,
    sequence::{
        bounds::SizeBounds,
        core::{Node, Sequence},
    },
};

/// How many passes a cycled sequence makes over its upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Times {
    Forever,
    Count(u64),
}

impl From<i64> for Times {
    // a count below one means no passes at all
    fn from(times: i64) -> Self {
        Times::Count(u64::try_from(times).unwrap_or(0))
    }
}

impl From<u64> for Times {
    fn from(times: u64) -> Self {
        Times::Count(times)
    }
}

pub(crate) struct Cycle<'a, T> {
    // never pulled; every pass is a fresh restart of it
    template: Box<Sequence<'a, T>>,
    current: Box<Sequence<'a, T>>,
    times: Times,
    // passes started so far, including the current one
    passes: u64,
    done: bool,
}

impl<'a, T: 'a> Cycle<'a, T> {
    fn new(template: Sequence<'a, T>, times: Times) -> Self {
        let current = template.restart();
        Cycle {
            template: Box::new(template),
            current: Box::new(current),
            times,
            passes: 1,
            done: false,
        }
    }

    pub(crate) fn template(&self) -> &Sequence<'a, T> {
        &self.template
    }

    fn has_next_pass(&self) -> bool {
        match self.times {
            Times::Forever => true,
            Times::Count(count) => self.passes < count,
        }
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        if let Some(item) = self.current.pull() {
            return Some(item);
        }
        if !self.has_next_pass() {
            self.done = true;
            return None;
        }
        self.current = Box::new(self.template.restart());
        self.passes += 1;
        tracing::trace!(pass = self.passes, "cycle starting next pass");
        let item = self.current.pull();
        if item.is_none() {
            // a pass that ends immediately means every later pass does too
            self.done = true;
        }
        item
    }

    pub(crate) fn restart(&self) -> Self {
        Cycle::new(self.template.restart(), self.times)
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        if self.done {
            return SizeBounds::exact(0);
        }
        let current = self.current.size_bounds();
        let pass = self.template.size_bounds();
        let rest = match self.times {
            // later passes share the drained source and yield nothing
            _ if !self.template.restartability().is_independent() => SizeBounds::exact(0),
            Times::Count(count) => pass.repeated(count.saturating_sub(self.passes)),
            Times::Forever if pass.is_exhausted() => SizeBounds::exact(0),
            Times::Forever if pass.lower() > 0 => SizeBounds::infinite(),
            Times::Forever => SizeBounds::unknown(),
        };
        current.plus(rest)
    }
}

impl<T> fmt::Debug for Cycle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("times", &self.times)
            .field("passes", &self.passes)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Replay this sequence `times` times in a row.
    ///
    /// Each pass after the first is obtained through [`Sequence::restart`].
    /// A `times` below one gives the empty sequence.
    ///
    /// A chain rooted in a one-shot source cannot be replayed: after its
    /// first pass the cycle silently produces nothing more. Use
    /// [`Sequence::try_cycle`] to reject such chains instead.
    pub fn cycle(self, times: i64) -> Self {
        self.cycle_with(Times::from(times))
    }

    /// Replay this sequence endlessly.
    ///
    /// Only a `take` or similar bound downstream keeps consumers of the
    /// result from looping forever.
    pub fn cycle_forever(self) -> Self {
        self.cycle_with(Times::Forever)
    }

    /// Same as [`Sequence::cycle`].
    pub fn repeat(self, times: i64) -> Self {
        self.cycle(times)
    }

    pub fn cycle_with(self, times: Times) -> Self {
        match times {
            Times::Count(0) => Sequence::empty(),
            times => Sequence::from_node(Node::Cycle(Cycle::new(self, times))),
        }
    }

    /// Like [`Sequence::cycle_with`], but fails with
    /// [`Error::NotRestartable`](error::Error::NotRestartable) when this
    /// chain cannot be replayed independently.
    pub fn try_cycle(self, times: Times) -> error::Result<Self> {
        if !self.is_restartable() {
            tracing::debug!(?times, "refusing to cycle a chain rooted in a one-shot source");
            return Err(error::Error::NotRestartable);
        }
        Ok(self.cycle_with(times))
    }

    /// Same as [`Sequence::try_cycle`] with a count.
    pub fn try_repeat(self, times: i64) -> error::Result<Self> {
        self.try_cycle(Times::from(times))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int_range;

    #[test]
    fn test_cycle_twice() {
        let v: Vec<_> = Sequence::of(['a', 'b', 'c']).cycle(2).into_iter().collect();
        assert_eq!(v, vec!['a', 'b', 'c', 'a', 'b', 'c']);
    }

    #[test]
    fn test_cycle_below_one_is_empty() {
        assert_eq!(int_range(0, 3).cycle(0).pull(), None);
        assert_eq!(int_range(0, 3).cycle(-4).pull(), None);
    }

    #[test]
    fn test_cycle_forever_with_take() {
        let v: Vec<_> = int_range(0, 2).cycle_forever().take(5).into_iter().collect();
        assert_eq!(v, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_cycle_forever_over_empty_ends() {
        let mut sequence = Sequence::<i32>::empty().cycle_forever();
        assert_eq!(sequence.pull(), None);
        assert_eq!(sequence.pull(), None);
    }

    #[test]
    fn test_cycle_bounds() {
        let mut sequence = int_range(0, 3).cycle(3);
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(9));
        sequence.pull();
        sequence.pull();
        sequence.pull();
        sequence.pull();
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(5));
        assert_eq!(
            int_range(0, 3).cycle_forever().size_bounds(),
            SizeBounds::infinite()
        );
    }

    #[test]
    fn test_cycle_bounds_over_one_shot_source() {
        let mut sequence = Sequence::of_iter(vec![1, 2, 3]).cycle(3);
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(3));
        sequence.pull();
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(2));
        let sequence = Sequence::of_iter(vec![1, 2]).cycle_forever();
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(2));
        let v: Vec<_> = sequence.into_iter().collect();
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn test_cycle_ignores_upstream_position() {
        let mut upstream = int_range(0, 3);
        upstream.pull();
        let v: Vec<_> = upstream.cycle(2).into_iter().collect();
        assert_eq!(v, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_cycle_restart() {
        let mut sequence = int_range(0, 2).cycle(2);
        sequence.pull();
        sequence.pull();
        sequence.pull();
        let v: Vec<_> = sequence.restart().into_iter().collect();
        assert_eq!(v, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_try_cycle_rejects_generator() {
        let mut n = 0;
        let sequence = Sequence::generate(move || {
            n += 1;
            Some(n)
        });
        assert_eq!(
            sequence.try_cycle(Times::Count(2)).err(),
            Some(error::Error::NotRestartable)
        );
    }

    #[test]
    fn test_times_from_negative() {
        assert_eq!(Times::from(-3i64), Times::Count(0));
        assert_eq!(Times::from(2i64), Times::Count(2));
    }
}
