//! The chain façade.
//!
//! [`Chain`] wraps a single [`Producer`] and exposes the builder methods
//! ([`Chain::filter`], [`Chain::map`]) and the terminal operations
//! ([`Chain::find_first`], [`Chain::sum`], [`Chain::join`], ...).
//!
//! Builder methods consume the chain and return a new one whose producer
//! wraps the old producer by value. Terminal operations consume the chain and
//! drive it until they have their answer. Because every stage is a generic
//! type, a pipeline such as
//!
//! ```rust
//! use iterchain::prelude::*;
//!
//! let total = range(0, 100)
//!     .filter(|x| x % 3 == 0)
//!     .map(|x| x * x)
//!     .sum::<i32>();
//! assert_eq!(total, 112_761);
//! ```
//!
//! has the concrete type
//! `Chain<MapProducer<FilterProducer<RangeProducer<i32>, _>, _>>` and is
//! inlined into one loop with no allocation and no dynamic dispatch.

use std::ops::Add;

use crate::producer::{FilterProducer, MapProducer, Producer};

/// Separator used by [`Chain::join_default`].
pub const DEFAULT_SEPARATOR: &str = ", ";

/// A composable lazy sequence.
///
/// A chain is created by one of the entry points in [`crate::source`] (or
/// [`Chain::new`] for a custom producer), refined with [`filter`](Chain::filter)
/// and [`map`](Chain::map), and consumed by exactly one terminal operation.
/// Chains are not restartable: pulling past exhaustion keeps returning
/// `None`.
///
/// # Examples
///
/// ```rust
/// use iterchain::prelude::*;
///
/// let names = ["ada", "grace", "barbara", "alan"];
/// let joined = iter(&names)
///     .filter(|name| name.starts_with('a'))
///     .map(|name| name.to_uppercase())
///     .join(" & ");
///
/// assert_eq!(joined, "ADA & ALAN");
/// ```
#[derive(Debug, Clone)]
#[must_use = "chains are lazy and do nothing unless consumed"]
pub struct Chain<P> {
    producer: P,
}

impl<P> Chain<P> {
    /// Wraps a producer in a chain.
    ///
    /// The built-in entry points call this for their leaf producers; it is
    /// public so that custom [`Producer`] implementations get the same
    /// builder and terminal operations.
    #[inline]
    pub const fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Unwraps the chain, returning its producer.
    #[inline]
    pub fn into_inner(self) -> P {
        self.producer
    }

    /// Borrows the chain mutably so a terminal operation can consume part of
    /// it while leaving the rest available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// let mut numbers = range(1, 10);
    /// assert_eq!(numbers.by_ref().find_first(|x| x % 4 == 0), Some(4));
    /// assert_eq!(numbers.sum::<i32>(), 5 + 6 + 7 + 8 + 9);
    /// ```
    #[inline]
    pub const fn by_ref(&mut self) -> Chain<&mut P> {
        Chain {
            producer: &mut self.producer,
        }
    }
}

impl<P: Producer> Chain<P> {
    /// Pulls the next element, or returns `None` once the chain is exhausted.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<P::Item> {
        self.producer.next()
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// let mut odd = range(0, 6).filter(|x| x % 2 == 1);
    /// assert_eq!(odd.next(), Some(1));
    /// assert_eq!(odd.next(), Some(3));
    /// assert_eq!(odd.next(), Some(5));
    /// assert_eq!(odd.next(), None);
    /// ```
    #[inline]
    pub fn filter<F>(self, predicate: F) -> Chain<FilterProducer<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Chain::new(FilterProducer::new(self.producer, predicate))
    }

    /// Transforms every element with `transform`.
    ///
    /// The element type of the returned chain is the transform's output type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// let joined = range(1, 4).map(|x| x.to_string()).join("+");
    /// assert_eq!(joined, "1+2+3");
    /// ```
    #[inline]
    pub fn map<B, F>(self, transform: F) -> Chain<MapProducer<P, F>>
    where
        F: FnMut(P::Item) -> B,
    {
        Chain::new(MapProducer::new(self.producer, transform))
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Returns the first element satisfying `predicate`, or `None`.
    ///
    /// Pulling stops at the first match, so the predicate is never evaluated
    /// on any element after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// assert_eq!(range(2, 10).find_first(|x| 10 % x == 0), Some(2));
    /// assert_eq!(range(2, 7).find_first(|x| 7 % x == 0), None);
    /// ```
    #[inline]
    pub fn find_first<F>(mut self, mut predicate: F) -> Option<P::Item>
    where
        F: FnMut(&P::Item) -> bool,
    {
        while let Some(element) = self.producer.next() {
            if predicate(&element) {
                return Some(element);
            }
        }
        None
    }

    /// Folds every element into an accumulator, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// let digits = range(1, 5).fold(0, |number, digit| number * 10 + digit);
    /// assert_eq!(digits, 1234);
    /// ```
    #[inline]
    pub fn fold<B, F>(mut self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, P::Item) -> B,
    {
        let mut accumulator = init;
        while let Some(element) = self.producer.next() {
            accumulator = combine(accumulator, element);
        }
        accumulator
    }

    /// Adds every element to `S::default()`.
    ///
    /// For the numeric types the default is zero, so an empty chain sums to
    /// zero. The accumulator type may differ from the element type as long as
    /// it can be added to it, which is how a chain of references sums into an
    /// owned total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// assert_eq!(range(0, 5).map(|x| x * x).sum::<i32>(), 30);
    ///
    /// let durations = vec![120_u64, 80, 100];
    /// assert_eq!(iter(&durations).sum::<u64>(), 300);
    /// ```
    #[inline]
    pub fn sum<S>(self) -> S
    where
        S: Default + Add<P::Item, Output = S>,
    {
        self.sum_from(S::default())
    }

    /// Adds every element to `start`, left to right in iteration order.
    ///
    /// An empty chain returns `start` unchanged.
    #[inline]
    pub fn sum_from<S>(self, start: S) -> S
    where
        S: Add<P::Item, Output = S>,
    {
        self.fold(start, |total, element| total + element)
    }

    /// Concatenates string-like elements with `separator` between them.
    ///
    /// The separator never appears before the first or after the last
    /// element. An empty chain yields an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterchain::prelude::*;
    ///
    /// let letters = ["a", "b", "c"];
    /// assert_eq!(iter(&letters).join("-"), "a-b-c");
    /// assert_eq!(iter(&letters[..1]).join("-"), "a");
    /// assert_eq!(iter(&letters[..0]).join("-"), "");
    /// ```
    pub fn join(mut self, separator: &str) -> String
    where
        P::Item: AsRef<str>,
    {
        let mut joined = String::new();
        if let Some(first) = self.producer.next() {
            joined.push_str(first.as_ref());
            while let Some(element) = self.producer.next() {
                joined.push_str(separator);
                joined.push_str(element.as_ref());
            }
        }
        joined
    }

    /// [`join`](Chain::join) with [`DEFAULT_SEPARATOR`].
    #[inline]
    pub fn join_default(self) -> String
    where
        P::Item: AsRef<str>,
    {
        self.join(DEFAULT_SEPARATOR)
    }

    /// Counts the remaining elements.
    #[inline]
    pub fn count(self) -> usize {
        self.fold(0, |count, _| count + 1)
    }

    /// Calls `action` on every remaining element.
    #[inline]
    pub fn for_each<F>(self, mut action: F)
    where
        F: FnMut(P::Item),
    {
        self.fold((), |(), element| action(element));
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first element that does.
    #[inline]
    pub fn any<F>(self, predicate: F) -> bool
    where
        F: FnMut(&P::Item) -> bool,
    {
        self.find_first(predicate).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first element that does not. An empty chain returns
    /// `true`.
    #[inline]
    pub fn all<F>(self, mut predicate: F) -> bool
    where
        F: FnMut(&P::Item) -> bool,
    {
        self.find_first(|element| !predicate(element)).is_none()
    }
}

/// A chain is itself a producer, so it can sit in the upstream slot of
/// another adaptor.
impl<P: Producer> Producer for Chain<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.producer.next()
    }
}

// =============================================================================
// Standard Library Interop
// =============================================================================

#[cfg(feature = "std-iter")]
impl<P: Producer> Iterator for Chain<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.producer.next()
    }
}

/// Every [`Producer`] keeps returning `None` after exhaustion.
#[cfg(feature = "std-iter")]
impl<P: Producer> std::iter::FusedIterator for Chain<P> {}
