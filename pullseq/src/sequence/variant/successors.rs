use std::rc::Rc;

use crate::sequence::{bounds::SizeBounds, core::Sequence, traits::Pull};

// Each element is computed from the previous one. Unlike a generator this
// is restartable: replaying only needs the first element and the function.
pub(crate) struct Successors<T, F> {
    first: Option<T>,
    state: State<T>,
    succ: Rc<F>,
}

// The successor of an element is only computed once the element after it is
// pulled.
enum State<T> {
    Start,
    After(T),
    Done,
}

impl<T, F> Successors<T, F> {
    pub(crate) fn new(first: Option<T>, succ: F) -> Self {
        Successors {
            first,
            state: State::Start,
            succ: Rc::new(succ),
        }
    }
}

impl<'a, T, F> Pull<'a, T> for Successors<T, F>
where
    T: Clone + 'a,
    F: Fn(&T) -> Option<T> + 'a,
{
    fn pull(&mut self) -> Option<T> {
        let next = match std::mem::replace(&mut self.state, State::Done) {
            State::Start => self.first.clone(),
            State::After(previous) => (self.succ)(&previous),
            State::Done => None,
        };
        let item = next?;
        self.state = State::After(item.clone());
        Some(item)
    }

    fn restart(&self) -> Sequence<'a, T> {
        Sequence::from_pull(Successors {
            first: self.first.clone(),
            state: State::Start,
            succ: Rc::clone(&self.succ),
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        match (&self.state, &self.first) {
            (State::Start, Some(_)) => SizeBounds::new(1, None),
            (State::Start, None) | (State::Done, _) => SizeBounds::exact(0),
            (State::After(_), _) => SizeBounds::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{Sequence, SizeBounds};

    #[test]
    fn test_successors_end_at_none() {
        let v: Vec<_> = Sequence::successors(Some(1u32), |x| x.checked_mul(10))
            .take(20)
            .into_iter()
            .collect();
        assert_eq!(v.len(), 10);
        assert_eq!(v[9], 1_000_000_000);
    }

    #[test]
    fn test_successors_without_first_is_empty() {
        let mut sequence = Sequence::successors(None, |x: &i32| Some(x + 1));
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(0));
        assert_eq!(sequence.pull(), None);
    }

    #[test]
    fn test_iterate_restart_replays_from_seed() {
        let mut sequence = Sequence::iterate(1, |x| x * 3);
        sequence.pull();
        sequence.pull();
        assert_eq!(sequence.pull(), Some(9));
        let v: Vec<_> = sequence.restart().take(3).into_iter().collect();
        assert_eq!(v, vec![1, 3, 9]);
    }

    #[test]
    fn test_successor_computed_on_next_pull() {
        let calls = Cell::new(0);
        let mut sequence = Sequence::iterate(0, |x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(sequence.pull(), Some(0));
        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.pull(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_iterate_up_to_type_maximum() {
        let v: Vec<_> = Sequence::iterate(i32::MAX - 1, |x| x + 1)
            .take(2)
            .into_iter()
            .collect();
        assert_eq!(v, vec![i32::MAX - 1, i32::MAX]);
    }
}
