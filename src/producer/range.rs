//! Bounded arithmetic progressions.

use super::Producer;

/// Integer types a [`RangeProducer`] can count over.
///
/// The trait supplies the zero used to reject non-positive steps, the unit
/// step, and an overflow-aware addition. It is implemented for every
/// primitive integer type.
pub trait RangeStep: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;

    /// The default step.
    const ONE: Self;

    /// Returns `self + step`, or `None` if the sum is not representable.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_range_step_for_integers {
    ($($ty:ty),*) => {
        $(
            impl RangeStep for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_range_step_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

/// Yields `start, start + step, start + 2 * step, ...` while the value stays
/// strictly below `end`.
///
/// A non-positive `step`, or `start >= end`, is not an error: the producer is
/// simply empty. An advance that would overflow `T` ends the sequence instead
/// of wrapping.
///
/// # Examples
///
/// ```rust
/// use iterchain::producer::{Producer, RangeProducer};
///
/// let mut range = RangeProducer::new(1, 10, 4);
/// assert_eq!(range.next(), Some(1));
/// assert_eq!(range.next(), Some(5));
/// assert_eq!(range.next(), Some(9));
/// assert_eq!(range.next(), None);
///
/// let mut backwards = RangeProducer::new(10, 0, -1);
/// assert_eq!(backwards.next(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeProducer<T> {
    current: T,
    end: T,
    step: T,
    exhausted: bool,
}

impl<T: RangeStep> RangeProducer<T> {
    /// Creates a producer over `[start, end)` advancing by `step`.
    #[inline]
    pub fn new(start: T, end: T, step: T) -> Self {
        Self {
            current: start,
            end,
            step,
            exhausted: step <= T::ZERO,
        }
    }

    /// Returns the value the next successful pull would yield.
    #[inline]
    pub const fn current(&self) -> T {
        self.current
    }
}

impl<T: RangeStep> Producer for RangeProducer<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.exhausted || self.current >= self.end {
            self.exhausted = true;
            return None;
        }

        let value = self.current;
        match value.checked_step(self.step) {
            Some(advanced) => self.current = advanced,
            None => self.exhausted = true,
        }
        Some(value)
    }
}
