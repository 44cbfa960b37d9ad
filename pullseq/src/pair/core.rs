use std::{fmt, hash::Hash};

use crate::{
    error,
    sequence::{IntoIter, Iter, Restartability, Sequence, SizeBounds, Times},
};

/// A [`Sequence`] of `(A, B)` pairs.
///
/// This is a view over `Sequence<'a, (A, B)>`: every operator packs the
/// two-argument function into a function over the tuple and delegates.
/// Converting in either direction with `From`/`Into` is free.
pub struct PairSequence<'a, A, B> {
    inner: Sequence<'a, (A, B)>,
}

impl<'a, A: 'a, B: 'a> PairSequence<'a, A, B> {
    pub fn into_sequence(self) -> Sequence<'a, (A, B)> {
        self.inner
    }

    pub fn pull(&mut self) -> Option<(A, B)> {
        self.inner.pull()
    }

    pub fn restart(&self) -> Self {
        self.inner.restart().into()
    }

    pub fn size_bounds(&self) -> SizeBounds {
        self.inner.size_bounds()
    }

    pub fn restartability(&self) -> Restartability {
        self.inner.restartability()
    }

    pub fn is_restartable(&self) -> bool {
        self.inner.is_restartable()
    }

    /// Combine both components into one value, leaving the pair world.
    pub fn map<R: 'a>(self, f: impl Fn(A, B) -> R + 'a) -> Sequence<'a, R> {
        self.inner.map(move |(a, b)| f(a, b))
    }

    /// Map each pair to a new pair.
    pub fn bi_map<C: 'a, D: 'a>(
        self,
        f: impl Fn(A, B) -> (C, D) + 'a,
    ) -> PairSequence<'a, C, D> {
        self.inner.bi_map(move |(a, b)| f(a, b))
    }

    pub fn keys(self) -> Sequence<'a, A> {
        self.inner.map(|(a, _)| a)
    }

    pub fn values(self) -> Sequence<'a, B> {
        self.inner.map(|(_, b)| b)
    }

    pub fn swap(self) -> PairSequence<'a, B, A> {
        self.inner.bi_map(|(a, b)| (b, a))
    }

    pub fn select(self, predicate: impl Fn(&A, &B) -> bool + 'a) -> Self {
        self.inner
            .select(move |pair: &(A, B)| predicate(&pair.0, &pair.1))
            .into()
    }

    pub fn reject(self, predicate: impl Fn(&A, &B) -> bool + 'a) -> Self {
        self.inner
            .reject(move |pair: &(A, B)| predicate(&pair.0, &pair.1))
            .into()
    }

    pub fn inspect(self, action: impl Fn(&A, &B) + 'a) -> Self {
        self.inner
            .inspect(move |pair: &(A, B)| action(&pair.0, &pair.1))
            .into()
    }

    pub fn drop(self, count: usize) -> Self {
        self.inner.drop(count).into()
    }

    pub fn take(self, count: usize) -> Self {
        self.inner.take(count).into()
    }

    pub fn drop_while(self, predicate: impl Fn(&A, &B) -> bool + 'a) -> Self {
        self.inner
            .drop_while(move |pair: &(A, B)| predicate(&pair.0, &pair.1))
            .into()
    }

    pub fn drop_until(self, predicate: impl Fn(&A, &B) -> bool + 'a) -> Self {
        self.inner
            .drop_until(move |pair: &(A, B)| predicate(&pair.0, &pair.1))
            .into()
    }

    pub fn take_while(self, predicate: impl Fn(&A, &B) -> bool + 'a) -> Self {
        self.inner
            .take_while(move |pair: &(A, B)| predicate(&pair.0, &pair.1))
            .into()
    }

    pub fn take_until(self, predicate: impl Fn(&A, &B) -> bool + 'a) -> Self {
        self.inner
            .take_until(move |pair: &(A, B)| predicate(&pair.0, &pair.1))
            .into()
    }

    /// Skip pairs equal in both components to one already produced.
    pub fn unique(self) -> Self
    where
        A: Eq + Hash + Clone,
        B: Eq + Hash + Clone,
    {
        self.inner.unique().into()
    }

    pub fn cycle(self, times: i64) -> Self {
        self.inner.cycle(times).into()
    }

    pub fn cycle_forever(self) -> Self {
        self.inner.cycle_forever().into()
    }

    pub fn repeat(self, times: i64) -> Self {
        self.inner.repeat(times).into()
    }

    pub fn cycle_with(self, times: Times) -> Self {
        self.inner.cycle_with(times).into()
    }

    pub fn try_cycle(self, times: Times) -> error::Result<Self> {
        Ok(self.inner.try_cycle(times)?.into())
    }

    pub fn try_repeat(self, times: i64) -> error::Result<Self> {
        Ok(self.inner.try_repeat(times)?.into())
    }

    pub fn for_each(self, mut action: impl FnMut(A, B)) {
        self.inner.for_each(|(a, b)| action(a, b))
    }

    pub fn all_match(&mut self, mut predicate: impl FnMut(&A, &B) -> bool) -> bool {
        self.inner.all_match(|pair| predicate(&pair.0, &pair.1))
    }

    pub fn any_match(&mut self, mut predicate: impl FnMut(&A, &B) -> bool) -> bool {
        self.inner.any_match(|pair| predicate(&pair.0, &pair.1))
    }

    pub fn none_match(&mut self, mut predicate: impl FnMut(&A, &B) -> bool) -> bool {
        self.inner.none_match(|pair| predicate(&pair.0, &pair.1))
    }

    /// Pulls exactly once, like [`Sequence::is_empty`].
    pub fn is_empty(&mut self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&mut self) -> Iter<'_, 'a, (A, B)> {
        self.inner.iter()
    }
}

impl<'a, A, B> From<Sequence<'a, (A, B)>> for PairSequence<'a, A, B> {
    fn from(inner: Sequence<'a, (A, B)>) -> Self {
        PairSequence { inner }
    }
}

impl<'a, A, B> From<PairSequence<'a, A, B>> for Sequence<'a, (A, B)> {
    fn from(pairs: PairSequence<'a, A, B>) -> Self {
        pairs.inner
    }
}

impl<'a, A: 'a, B: 'a> IntoIterator for PairSequence<'a, A, B> {
    type Item = (A, B);
    type IntoIter = IntoIter<'a, (A, B)>;

    fn into_iter(self) -> IntoIter<'a, (A, B)> {
        self.inner.into_iter()
    }
}

impl<A, B> Default for PairSequence<'_, A, B> {
    fn default() -> Self {
        PairSequence {
            inner: Sequence::default(),
        }
    }
}

impl<A, B> fmt::Debug for PairSequence<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PairSequence").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use crate::{int_range, PairSequence};

    fn scores() -> PairSequence<'static, &'static str, i32> {
        PairSequence::from_pairs([("ann", 3), ("bob", 5), ("cy", 5), ("ann", 3)])
    }

    #[test]
    fn test_select_two_arguments() {
        let v: Vec<_> = scores()
            .select(|name, score| name.len() == 3 && *score > 3)
            .into_iter()
            .collect();
        assert_eq!(v, vec![("bob", 5)]);
    }

    #[test]
    fn test_map_leaves_pairs() {
        let v: Vec<_> = scores()
            .map(|name, score| format!("{name}:{score}"))
            .into_iter()
            .collect();
        assert_eq!(v, vec!["ann:3", "bob:5", "cy:5", "ann:3"]);
    }

    #[test]
    fn test_unique_compares_both_components() {
        let v: Vec<_> = scores().unique().into_iter().collect();
        assert_eq!(v, vec![("ann", 3), ("bob", 5), ("cy", 5)]);
    }

    #[test]
    fn test_swap_keys_values() {
        let v: Vec<_> = scores().swap().keys().into_iter().collect();
        assert_eq!(v, vec![3, 5, 5, 3]);
        let v: Vec<_> = scores().values().into_iter().collect();
        assert_eq!(v, vec![3, 5, 5, 3]);
    }

    #[test]
    fn test_take_while_two_arguments() {
        let v: Vec<_> = int_range(0, 10)
            .enumerate()
            .take_while(|index, value| *index as i32 + *value < 6)
            .into_iter()
            .collect();
        assert_eq!(v, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_terminals() {
        assert!(scores().all_match(|_, score| *score >= 3));
        assert!(scores().any_match(|name, _| *name == "cy"));
        assert!(scores().none_match(|name, _| name.is_empty()));
        assert!(!scores().is_empty());
        let mut total = 0;
        scores().for_each(|_, score| total += score);
        assert_eq!(total, 16);
    }

    #[test]
    fn test_debug() {
        assert_snapshot!(
            format!("{:?}", scores().drop(1)),
            @"PairSequence(Drop { count: 1, phase: Open, upstream: Source })"
        );
    }
}
