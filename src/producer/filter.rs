//! Predicate-driven filtering.

use super::Producer;

/// Yields only the upstream elements for which the predicate returns `true`.
///
/// Each call to [`Producer::next`] may pull several upstream elements. The
/// predicate is evaluated exactly once per pulled element, in upstream
/// order, and the producer stops pulling as soon as one element is accepted.
///
/// # Examples
///
/// ```rust
/// use iterchain::producer::{FilterProducer, Producer, RangeProducer};
///
/// let mut multiples = FilterProducer::new(RangeProducer::new(1, 20, 1), |x: &i32| x % 7 == 0);
/// assert_eq!(multiples.next(), Some(7));
/// assert_eq!(multiples.next(), Some(14));
/// assert_eq!(multiples.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct FilterProducer<P, F> {
    upstream: P,
    predicate: F,
}

impl<P, F> FilterProducer<P, F> {
    /// Wraps `upstream`, keeping the elements accepted by `predicate`.
    #[inline]
    pub const fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
        }
    }

    /// Unwraps the filter, returning the upstream producer.
    #[inline]
    pub fn into_inner(self) -> P {
        self.upstream
    }
}

impl<P, F> Producer for FilterProducer<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        while let Some(element) = self.upstream.next() {
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
        None
    }
}
