use super::core::Sequence;

// Terminal consumers drive the pull loop to produce a plain value. All of
// them stop pulling as soon as the answer is known; on an infinite sequence
// without such an early answer they never return.

impl<'a, T: 'a> Sequence<'a, T> {
    /// Pull every element, handing each to `action`.
    pub fn for_each(mut self, mut action: impl FnMut(T)) {
        while let Some(item) = self.pull() {
            action(item);
        }
    }

    /// Whether every element passes `predicate`. Vacuously true when the
    /// sequence is empty.
    ///
    /// Stops at the first failing element, which is consumed.
    pub fn all_match(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        while let Some(item) = self.pull() {
            if !predicate(&item) {
                return false;
            }
        }
        true
    }

    /// Whether some element passes `predicate`.
    ///
    /// Stops at the first passing element, which is consumed.
    pub fn any_match(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        while let Some(item) = self.pull() {
            if predicate(&item) {
                return true;
            }
        }
        false
    }

    /// Whether no element passes `predicate`.
    pub fn none_match(&mut self, predicate: impl FnMut(&T) -> bool) -> bool {
        !self.any_match(predicate)
    }

    /// Whether the sequence has no more elements.
    ///
    /// This pulls exactly once, so a non-empty sequence loses its first
    /// element. Use [`Sequence::size_bounds`] for a check that pulls
    /// nothing.
    pub fn is_empty(&mut self) -> bool {
        self.pull().is_none()
    }
}
