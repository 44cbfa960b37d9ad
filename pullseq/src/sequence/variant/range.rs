use num_traits::PrimInt;

use crate::{
    error,
    sequence::{bounds::SizeBounds, core::Sequence, traits::Pull},
};

/// An arithmetic progression over a primitive integer type.
///
/// The range is half-open (`[start, end)`) unless `inclusive` is set. It runs
/// upward for a positive step and downward for a negative one. A step that
/// would overflow the integer type ends the range instead of wrapping, so a
/// closed range ending at the type's maximum terminates.
#[derive(Debug, Clone)]
pub(crate) struct Range<T> {
    end: T,
    step: T,
    inclusive: bool,
    first: Option<T>,
    next: Option<T>,
}

impl<T: PrimInt> Range<T> {
    pub(crate) fn new(start: T, end: T, step: T, inclusive: bool) -> error::Result<Self> {
        if step == T::zero() {
            return Err(error::Error::ZeroStep);
        }
        Ok(Range::with_step(start, end, step, inclusive))
    }

    /// A range counting up by one.
    pub(crate) fn unit(start: T, end: T, inclusive: bool) -> Self {
        Range::with_step(start, end, T::one(), inclusive)
    }

    // `step` must be non-zero
    fn with_step(start: T, end: T, step: T, inclusive: bool) -> Self {
        let mut range = Range {
            end,
            step,
            inclusive,
            first: None,
            next: None,
        };
        range.first = range.admit(start);
        range.next = range.first;
        range
    }

    fn ascending(&self) -> bool {
        self.step > T::zero()
    }

    fn admit(&self, value: T) -> Option<T> {
        let inside = match (self.ascending(), self.inclusive) {
            (true, false) => value < self.end,
            (true, true) => value <= self.end,
            (false, false) => value > self.end,
            (false, true) => value >= self.end,
        };
        inside.then_some(value)
    }

    // computed in i128 so that every primitive type up to i64/u64 fits; the
    // count is unknown only when it cannot be expressed as a usize
    fn remaining(&self, current: T) -> Option<usize> {
        let current = current.to_i128()?;
        let end = self.end.to_i128()?;
        let step = self.step.to_i128()?;
        let (distance, step) = if step > 0 {
            (end.checked_sub(current)?, step)
        } else {
            (current.checked_sub(end)?, step.checked_neg()?)
        };
        let count = if self.inclusive {
            distance / step + 1
        } else {
            distance / step + i128::from(distance % step != 0)
        };
        usize::try_from(count).ok()
    }
}

impl<'a, T: PrimInt + 'a> Pull<'a, T> for Range<T> {
    fn pull(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = match current.checked_add(&self.step) {
            Some(value) => self.admit(value),
            None => {
                tracing::trace!("range ended on step overflow");
                None
            }
        };
        Some(current)
    }

    fn restart(&self) -> Sequence<'a, T> {
        Sequence::from_pull(Range {
            next: self.first,
            ..self.clone()
        })
    }

    fn size_bounds(&self) -> SizeBounds {
        match self.next {
            None => SizeBounds::exact(0),
            Some(current) => match self.remaining(current) {
                Some(count) => SizeBounds::exact(count),
                None => SizeBounds::new(usize::MAX, None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error, Sequence, SizeBounds};

    fn collect<'a, T: 'a>(sequence: Sequence<'a, T>) -> Vec<T> {
        sequence.into_iter().collect()
    }

    #[test]
    fn test_half_open() {
        assert_eq!(collect(Sequence::range(0, 5)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_closed() {
        assert_eq!(collect(Sequence::closed_range(0, 3)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_when_start_not_before_end() {
        assert_eq!(collect(Sequence::range(5, 5)), Vec::<i32>::new());
        assert_eq!(collect(Sequence::range(6, 5)), Vec::<i32>::new());
        assert_eq!(collect(Sequence::closed_range(6, 5)), Vec::<i32>::new());
        assert_eq!(
            collect(Sequence::closed_range(i8::MIN + 1, i8::MIN)),
            Vec::<i8>::new()
        );
    }

    #[test]
    fn test_step_not_landing_on_end() -> error::Result<()> {
        assert_eq!(collect(Sequence::range_by(0, 10, 3)?), vec![0, 3, 6, 9]);
        assert_eq!(collect(Sequence::closed_range_by(0, 9, 3)?), vec![0, 3, 6, 9]);
        Ok(())
    }

    #[test]
    fn test_descending() -> error::Result<()> {
        assert_eq!(collect(Sequence::range_by(5, 0, -2)?), vec![5, 3, 1]);
        assert_eq!(collect(Sequence::closed_range_by(4, 0, -2)?), vec![4, 2, 0]);
        Ok(())
    }

    #[test]
    fn test_zero_step() {
        assert_eq!(
            Sequence::range_by(0, 10, 0).err(),
            Some(error::Error::ZeroStep)
        );
    }

    #[test]
    fn test_closed_at_type_maximum_terminates() {
        assert_eq!(collect(Sequence::closed_range(253u8, 255)), vec![253, 254, 255]);
        assert_eq!(collect(Sequence::closed_range(i8::MAX - 1, i8::MAX)), vec![126, 127]);
    }

    #[test]
    fn test_step_overflow_ends_range() -> error::Result<()> {
        assert_eq!(
            collect(Sequence::range_by(i8::MAX - 10, i8::MAX, 7)?),
            vec![117, 124]
        );
        assert_eq!(
            collect(Sequence::closed_range_by(i8::MIN + 3, i8::MIN, -2)?),
            vec![-125, -127]
        );
        Ok(())
    }

    #[test]
    fn test_bounds() -> error::Result<()> {
        let mut sequence = Sequence::range_by(0, 10, 3)?;
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(4));
        sequence.pull();
        assert_eq!(sequence.size_bounds(), SizeBounds::exact(3));
        assert_eq!(
            Sequence::closed_range(i64::MIN, i64::MAX).size_bounds(),
            SizeBounds::new(usize::MAX, None)
        );
        assert_eq!(
            Sequence::closed_range(u8::MIN, u8::MAX).size_bounds(),
            SizeBounds::exact(256)
        );
        Ok(())
    }

    #[test]
    fn test_restart_replays_from_start() {
        let mut sequence = Sequence::range(1, 4);
        sequence.pull();
        sequence.pull();
        assert_eq!(collect(sequence.restart()), vec![1, 2, 3]);
        assert_eq!(collect(sequence), vec![3]);
    }
}
