/// Bounds on the number of elements a sequence has left to produce.
///
/// `upper` is `None` when the sequence is unbounded or its length cannot be
/// known without pulling. A sequence that is known to be infinite reports a
/// `lower` of `usize::MAX`, the same convention `Iterator::size_hint` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeBounds {
    lower: usize,
    upper: Option<usize>,
}

impl SizeBounds {
    pub const fn new(lower: usize, upper: Option<usize>) -> Self {
        SizeBounds { lower, upper }
    }

    /// Exactly `len` elements remain.
    pub const fn exact(len: usize) -> Self {
        SizeBounds::new(len, Some(len))
    }

    /// Nothing is known about the remaining length.
    pub const fn unknown() -> Self {
        SizeBounds::new(0, None)
    }

    /// The sequence never ends.
    pub const fn infinite() -> Self {
        SizeBounds::new(usize::MAX, None)
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> Option<usize> {
        self.upper
    }

    /// Whether the bounds pin down the exact remaining length.
    pub fn is_exact(&self) -> bool {
        self.upper == Some(self.lower)
    }

    /// Whether the sequence is known to produce nothing more.
    pub fn is_exhausted(&self) -> bool {
        self.upper == Some(0)
    }

    // no more than `n` of these elements will be delivered
    pub(crate) fn at_most(self, n: usize) -> Self {
        SizeBounds::new(
            self.lower.min(n),
            Some(self.upper.map_or(n, |upper| upper.min(n))),
        )
    }

    // the first `n` elements are discarded
    pub(crate) fn skip(self, n: usize) -> Self {
        SizeBounds::new(
            self.lower.saturating_sub(n),
            self.upper.map(|upper| upper.saturating_sub(n)),
        )
    }

    // any number of elements may be discarded
    pub(crate) fn relax(self) -> Self {
        SizeBounds::new(0, self.upper)
    }

    pub(crate) fn plus(self, other: Self) -> Self {
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        SizeBounds::new(self.lower.saturating_add(other.lower), upper)
    }

    pub(crate) fn repeated(self, times: u64) -> Self {
        let times = usize::try_from(times).unwrap_or(usize::MAX);
        SizeBounds::new(
            self.lower.saturating_mul(times),
            self.upper.and_then(|upper| upper.checked_mul(times)),
        )
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        SizeBounds::unknown()
    }
}

impl From<SizeBounds> for (usize, Option<usize>) {
    fn from(bounds: SizeBounds) -> Self {
        (bounds.lower, bounds.upper)
    }
}
