//! Element-wise transformation.

use super::Producer;

/// Applies a transform to every upstream element.
///
/// Exactly one upstream element is pulled per call, and the transform runs
/// only when that pull succeeds. The output type is whatever the transform
/// returns.
///
/// # Examples
///
/// ```rust
/// use iterchain::producer::{MapProducer, Producer, RangeProducer};
///
/// let mut labels = MapProducer::new(RangeProducer::new(1, 3, 1), |x: i32| format!("#{x}"));
/// assert_eq!(labels.next(), Some("#1".to_string()));
/// assert_eq!(labels.next(), Some("#2".to_string()));
/// assert_eq!(labels.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MapProducer<P, F> {
    upstream: P,
    transform: F,
}

impl<P, F> MapProducer<P, F> {
    /// Wraps `upstream`, passing each of its elements through `transform`.
    #[inline]
    pub const fn new(upstream: P, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }

    /// Unwraps the map, returning the upstream producer.
    #[inline]
    pub fn into_inner(self) -> P {
        self.upstream
    }
}

impl<P, F, B> Producer for MapProducer<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.upstream.next().map(&mut self.transform)
    }
}
