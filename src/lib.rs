//! # iterchain
//!
//! Zero-cost lazy sequence chains built on a pull-based producer protocol.
//!
//! ## Overview
//!
//! A chain is a stack of small adaptors, each pulling from the one below it:
//!
//! - **Leaf producers**: bounded integer ranges and cursor walks over
//!   borrowed slices
//! - **Transform producers**: filtering by predicate and mapping by function
//! - **The chain façade**: builder methods (`filter`, `map`) and terminal
//!   operations (`find_first`, `sum`, `join`, `fold`, `count`, ...)
//!
//! Every stage is a generic struct that owns its upstream by value, so the
//! type of a pipeline spells out its whole shape. Nothing is boxed and nothing
//! is materialized between stages. After monomorphization a pipeline is one
//! loop, as fast as the equivalent hand-written `for`.
//!
//! ## Feature Flags
//!
//! - `std-iter` (default): `Chain` implements [`Iterator`] and
//!   [`FusedIterator`](std::iter::FusedIterator)
//!
//! ## Example
//!
//! ```rust
//! use iterchain::prelude::*;
//!
//! fn is_prime(number: i32) -> bool {
//!     number >= 2 && range(2, number).find_first(|divisor| number % divisor == 0).is_none()
//! }
//!
//! assert!(is_prime(13));
//! assert!(!is_prime(15));
//!
//! let squares_of_odds = range(0, 10)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .sum::<i32>();
//! assert_eq!(squares_of_odds, 1 + 9 + 25 + 49 + 81);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the chain type, the entry points and the producer trait.
///
/// # Usage
///
/// ```rust
/// use iterchain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::{Chain, DEFAULT_SEPARATOR};
    pub use crate::producer::*;
    pub use crate::source::*;
}

pub mod chain;
pub mod producer;
pub mod source;

pub use chain::Chain;
pub use source::{iter, iter_between, range, range_step};
