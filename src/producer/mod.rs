//! The pull protocol and the producers that implement it.
//!
//! A [`Producer`] hands out one element per call to [`Producer::next`], or
//! `None` once it has nothing left. There is no third outcome: exhaustion is
//! the only termination signal, and it is sticky. Once a producer has
//! returned `None`, every later call returns `None` as well.
//!
//! Producers come in two shapes:
//!
//! - **Leaf producers** generate elements without an upstream:
//!   [`RangeProducer`] and [`SequenceProducer`].
//! - **Transform producers** own exactly one upstream producer by value and
//!   alter its output: [`FilterProducer`] and [`MapProducer`].
//!
//! Transform producers are generic over their upstream, so a composed
//! pipeline is one concrete nested type. The compiler sees the whole chain
//! at once and can fuse it into a single loop.
//!
//! # Examples
//!
//! ```rust
//! use iterchain::producer::{FilterProducer, Producer, RangeProducer};
//!
//! let mut evens = FilterProducer::new(RangeProducer::new(0, 7, 1), |x: &i32| x % 2 == 0);
//!
//! assert_eq!(evens.next(), Some(0));
//! assert_eq!(evens.next(), Some(2));
//! assert_eq!(evens.next(), Some(4));
//! assert_eq!(evens.next(), Some(6));
//! assert_eq!(evens.next(), None);
//! assert_eq!(evens.next(), None);
//! ```

mod filter;
mod map;
mod range;
mod sequence;

pub use filter::FilterProducer;
pub use map::MapProducer;
pub use range::{RangeProducer, RangeStep};
pub use sequence::SequenceProducer;

/// A source of elements pulled one at a time.
///
/// # Laws
///
/// ## Sticky Exhaustion
///
/// Once `next` has returned `None`, every subsequent call on the same value
/// returns `None`:
///
/// ```text
/// producer.next() == None  =>  producer.next() == None
/// ```
///
/// ## No Look-Ahead
///
/// A call to `next` advances internal state only as far as needed to produce
/// one element or to establish that none is left. Dropping a producer part
/// way through is always valid and needs no cleanup.
///
/// # Examples
///
/// Implementing a custom leaf producer:
///
/// ```rust
/// use iterchain::producer::Producer;
///
/// struct Countdown(u32);
///
/// impl Producer for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             return None;
///         }
///         self.0 -= 1;
///         Some(self.0)
///     }
/// }
///
/// let mut countdown = Countdown(2);
/// assert_eq!(countdown.next(), Some(1));
/// assert_eq!(countdown.next(), Some(0));
/// assert_eq!(countdown.next(), None);
/// ```
pub trait Producer {
    /// The type of element this producer yields.
    type Item;

    /// Pulls the next element, or returns `None` if the producer is exhausted.
    fn next(&mut self) -> Option<Self::Item>;
}

/// Driving a producer through a mutable reference pulls from the referent,
/// so a pipeline can be partially consumed and resumed later.
impl<P> Producer for &mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}
