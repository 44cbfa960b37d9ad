use crate::{
    pair::PairSequence,
    sequence::{
        bounds::SizeBounds,
        core::Sequence,
        traits::{Pull, Restartability},
    },
};

struct Enumerate<'a, T> {
    upstream: Sequence<'a, T>,
    index: usize,
}

impl<'a, T: 'a> Pull<'a, (usize, T)> for Enumerate<'a, T> {
    fn pull(&mut self) -> Option<(usize, T)> {
        let item = self.upstream.pull()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn restart(&self) -> Sequence<'a, (usize, T)> {
        Sequence::from_pull(Enumerate {
            upstream: self.upstream.restart(),
            index: 0,
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        self.upstream.size_bounds()
    }

    fn restartability(&self) -> Restartability {
        self.upstream.restartability()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Pair each element with its 0-based position in this sequence.
    pub fn enumerate(self) -> PairSequence<'a, usize, T> {
        Sequence::from_pull(Enumerate {
            upstream: self,
            index: 0,
        })
        .into()
    }
}
