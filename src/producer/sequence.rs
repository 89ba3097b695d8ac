//! Cursor walk over a borrowed slice.

use super::Producer;

/// Yields references to the elements of a borrowed slice between a begin and
/// an end cursor.
///
/// The producer never owns the elements. The lifetime `'a` ties every chain
/// built on top of it to the slice, so the slice can be neither dropped nor
/// mutated while the chain is alive.
///
/// # Examples
///
/// ```rust
/// use iterchain::producer::{Producer, SequenceProducer};
///
/// let words = ["alpha", "beta", "gamma", "delta"];
/// let mut middle = SequenceProducer::between(&words, 1, 3);
///
/// assert_eq!(middle.next(), Some(&"beta"));
/// assert_eq!(middle.next(), Some(&"gamma"));
/// assert_eq!(middle.next(), None);
/// ```
#[derive(Debug)]
pub struct SequenceProducer<'a, T> {
    elements: &'a [T],
    position: usize,
    end: usize,
}

impl<'a, T> SequenceProducer<'a, T> {
    /// Creates a producer over the whole slice.
    #[inline]
    pub const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: 0,
            end: elements.len(),
        }
    }

    /// Creates a producer over `elements[begin..end]`.
    ///
    /// The cursor pair must satisfy `begin <= end <= elements.len()`. This is
    /// asserted in debug builds only; release builds clamp `end` to the slice
    /// length and yield nothing if `begin` lies past it.
    #[inline]
    pub fn between(elements: &'a [T], begin: usize, end: usize) -> Self {
        debug_assert!(
            begin <= end && end <= elements.len(),
            "cursor pair {begin}..{end} is not within a slice of length {}",
            elements.len()
        );

        Self {
            elements,
            position: begin,
            end: end.min(elements.len()),
        }
    }

    /// Number of elements left before the end cursor.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.end.saturating_sub(self.position)
    }
}

// Derived `Clone` would require `T: Clone`.
impl<T> Clone for SequenceProducer<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
            end: self.end,
        }
    }
}

impl<'a, T> Producer for SequenceProducer<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.position >= self.end {
            return None;
        }

        let element = self.elements.get(self.position)?;
        self.position += 1;
        Some(element)
    }
}
