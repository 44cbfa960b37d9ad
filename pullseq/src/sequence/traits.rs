use super::{bounds::SizeBounds, core::Sequence};

/// Whether restarting a sequence replays it from its logical start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Restartability {
    /// A restarted sequence is independent and reproduces the original
    /// element order from the beginning.
    Independent,
    /// A restarted sequence is another handle onto the same one-shot
    /// resource: it continues wherever that resource currently is.
    Shared,
}

impl Restartability {
    pub fn is_independent(self) -> bool {
        matches!(self, Restartability::Independent)
    }
}

/// The core sequence interface: the pull and restart contracts.
///
/// Every leaf producer implements this, and custom producers can too; wrap
/// one with [`Sequence::from_pull`] to get the whole operator API on top of
/// it.
///
/// Implementations must keep exhaustion permanent: once `pull` returned
/// `None`, every later call on the same value returns `None` as well.
pub trait Pull<'a, T> {
    /// Produce the next element, or `None` at the end of the sequence.
    fn pull(&mut self) -> Option<T>;

    /// Produce a sequence that starts over at this producer's logical start,
    /// regardless of how far this one has been pulled.
    ///
    /// Producers over one-shot resources cannot do that; they return a
    /// handle sharing their position and report
    /// [`Restartability::Shared`].
    fn restart(&self) -> Sequence<'a, T>;

    /// Bounds on the number of elements left.
    fn size_bounds(&self) -> SizeBounds {
        SizeBounds::unknown()
    }

    fn restartability(&self) -> Restartability {
        Restartability::Independent
    }
}
