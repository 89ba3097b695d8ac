//! Entry points that originate a chain.
//!
//! Every chain starts from one of these functions. All other chains are
//! derived from them with [`Chain::filter`] and [`Chain::map`].

use crate::chain::Chain;
use crate::producer::{RangeProducer, RangeStep, SequenceProducer};

/// Counts from `start` up to, but not including, `stop`.
///
/// Yields nothing if `start >= stop`.
///
/// # Examples
///
/// ```rust
/// use iterchain::source::range;
///
/// let mut digits = range(7, 10);
/// assert_eq!(digits.next(), Some(7));
/// assert_eq!(digits.next(), Some(8));
/// assert_eq!(digits.next(), Some(9));
/// assert_eq!(digits.next(), None);
/// ```
#[inline]
pub fn range<T: RangeStep>(start: T, stop: T) -> Chain<RangeProducer<T>> {
    range_step(start, stop, T::ONE)
}

/// Counts from `start` towards `stop` (exclusive) in increments of `step`.
///
/// A non-positive `step` produces an empty chain rather than an error.
///
/// # Examples
///
/// ```rust
/// use iterchain::source::range_step;
///
/// assert_eq!(range_step(0, 20, 5).sum::<i32>(), 30);
/// assert_eq!(range_step(0, 20, 0).count(), 0);
/// ```
#[inline]
pub fn range_step<T: RangeStep>(start: T, stop: T, step: T) -> Chain<RangeProducer<T>> {
    Chain::new(RangeProducer::new(start, stop, step))
}

/// Walks every element of a borrowed slice.
///
/// The chain yields `&T` and borrows `elements` for as long as it lives.
///
/// # Examples
///
/// ```rust
/// use iterchain::source::iter;
///
/// let primes = vec![2, 3, 5, 7];
/// assert_eq!(iter(&primes).find_first(|p| **p > 4), Some(&5));
/// ```
#[inline]
pub const fn iter<T>(elements: &[T]) -> Chain<SequenceProducer<'_, T>> {
    Chain::new(SequenceProducer::new(elements))
}

/// Walks `elements[begin..end]`.
///
/// Requires `begin <= end <= elements.len()`, checked in debug builds only.
///
/// # Examples
///
/// ```rust
/// use iterchain::source::iter_between;
///
/// let letters = ["w", "x", "y", "z"];
/// assert_eq!(iter_between(&letters, 1, 3).join(""), "xy");
/// ```
#[inline]
pub fn iter_between<T>(elements: &[T], begin: usize, end: usize) -> Chain<SequenceProducer<'_, T>> {
    Chain::new(SequenceProducer::between(elements, begin, end))
}
