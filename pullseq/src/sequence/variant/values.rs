use crate::sequence::{bounds::SizeBounds, core::Sequence, traits::Pull};

// A fixed list of values, either owned (`Rc<[T]>`) or borrowed (`&[T]`).
// Restarts share the backing storage and only reset the cursor.
#[derive(Debug, Clone)]
pub(crate) struct Values<S> {
    values: S,
    index: usize,
}

impl<S> Values<S> {
    pub(crate) fn new(values: S) -> Self {
        Values { values, index: 0 }
    }
}

impl<'a, S, T> Pull<'a, T> for Values<S>
where
    S: AsRef<[T]> + Clone + 'a,
    T: Clone + 'a,
{
    fn pull(&mut self) -> Option<T> {
        let item = self.values.as_ref().get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }

    fn restart(&self) -> Sequence<'a, T> {
        Sequence::from_pull(Values::new(self.values.clone()))
    }

    fn size_bounds(&self) -> SizeBounds {
        SizeBounds::exact(self.values.as_ref().len().saturating_sub(self.index))
    }
}

#[cfg(test)]
mod tests {
    use crate::{SizeBounds, Sequence};

    #[test]
    fn test_values_restart_from_start() {
        let mut sequence = Sequence::of(vec![1, 2, 3]);
        assert_eq!(sequence.pull(), Some(1));
        let mut restarted = sequence.restart();
        assert_eq!(restarted.pull(), Some(1));
        assert_eq!(sequence.pull(), Some(2));
    }

    #[test]
    fn test_values_bounds_shrink() {
        let values = [1, 2, 3];
        let mut sequence = Sequence::of_slice(&values);
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(3));
        sequence.pull();
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(2));
    }

    #[test]
    fn test_values_exhaustion_is_permanent() {
        let values = [7];
        let mut sequence = Sequence::of_slice(&values);
        assert_eq!(sequence.pull(), Some(7));
        assert_eq!(sequence.pull(), None);
        assert_eq!(sequence.pull(), None);
    }
}
