use std::rc::Rc;

use crate::sequence::{variant::Entries, Pull, Sequence};

use super::PairSequence;

impl<'a, A: 'a, B: 'a> PairSequence<'a, A, B> {
    pub fn empty() -> Self {
        PairSequence::default()
    }

    /// A sequence over the entries of a borrowed map, cloned out of it as
    /// they are pulled.
    ///
    /// Any container iterable by reference as `(&A, &B)` works, such as
    /// `HashMap` or `BTreeMap`. Restarting replays the map in its own
    /// iteration order.
    pub fn of_map<M>(map: &'a M) -> Self
    where
        M: ?Sized + 'a,
        &'a M: IntoIterator<Item = (&'a A, &'a B)>,
        A: Clone,
        B: Clone,
    {
        Sequence::from_pull(Entries::new(map)).into()
    }

    /// A sequence over a fixed list of pairs.
    pub fn from_pairs(pairs: impl Into<Rc<[(A, B)]>>) -> Self
    where
        A: Clone,
        B: Clone,
    {
        Sequence::of(pairs).into()
    }

    pub fn from_pull(pull: impl Pull<'a, (A, B)> + 'a) -> Self {
        Sequence::from_pull(pull).into()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Map each element to a pair.
    pub fn bi_map<A: 'a, B: 'a>(self, f: impl Fn(T) -> (A, B) + 'a) -> PairSequence<'a, A, B> {
        self.map(f).into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{PairSequence, Sequence};

    #[test]
    fn test_of_map_restarts() {
        let map: HashMap<String, usize> = ["a", "bb", "ccc"]
            .into_iter()
            .map(|s| (s.to_string(), s.len()))
            .collect();
        let mut pairs = PairSequence::of_map(&map);
        assert!(pairs.is_restartable());
        pairs.pull();
        let mut v: Vec<_> = pairs.restart().into_iter().collect();
        v.sort();
        assert_eq!(
            v,
            vec![
                ("a".to_string(), 1),
                ("bb".to_string(), 2),
                ("ccc".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_bi_map() {
        let v: Vec<_> = Sequence::of(["x", "yy"])
            .bi_map(|s| (s, s.len()))
            .into_iter()
            .collect();
        assert_eq!(v, vec![("x", 1), ("yy", 2)]);
    }

    #[test]
    fn test_round_trip_conversion() {
        let pairs: PairSequence<_, _> = Sequence::of([(1, 'a'), (2, 'b')]).into();
        let mut sequence: Sequence<_> = pairs.into();
        assert_eq!(sequence.pull(), Some((1, 'a')));
    }
}
