//! Property-based tests for the producer and chain laws.
//!
//! - **Arithmetic Progression**: `range_step(start, stop, step)` yields exactly
//!   the values `start + k * step` below `stop`
//! - **Empty Range**: `start >= stop` yields nothing for any step
//! - **Sticky Exhaustion**: after the first `None`, every pull is `None`
//! - **Filter/Map Equivalence**: `iter(s).filter(p).map(f)` yields
//!   `[f(x) for x in s if p(x)]`
//! - **Short Circuit**: `find_first` evaluates its predicate exactly up to
//!   the first match

use iterchain::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;

fn drain<P: Producer>(mut producer: P) -> Vec<P::Item> {
    let mut items = Vec::new();
    while let Some(item) = producer.next() {
        items.push(item);
    }
    items
}

// =============================================================================
// Range Laws
// =============================================================================

proptest! {
    /// The range equals the arithmetic progression below stop.
    #[test]
    fn prop_range_is_arithmetic_progression(
        start in -1_000_i32..1_000,
        length in 0_i32..500,
        step in 1_i32..50,
    ) {
        let stop = start + length;
        let expected: Vec<i32> = (start..stop).step_by(step as usize).collect();

        prop_assert_eq!(drain(range_step(start, stop, step)), expected);
    }

    /// Consecutive elements differ by exactly step, and all stay below stop.
    #[test]
    fn prop_range_has_no_gaps_or_duplicates(
        start in any::<i16>(),
        stop in any::<i16>(),
        step in 1_i16..=i16::MAX,
    ) {
        let values = drain(range_step(start, stop, step));

        if let Some(first) = values.first() {
            prop_assert_eq!(*first, start);
        }
        for pair in values.windows(2) {
            prop_assert_eq!(i32::from(pair[1]) - i32::from(pair[0]), i32::from(step));
        }
        prop_assert!(values.iter().all(|value| *value < stop));
    }

    /// start >= stop never yields, whatever the step.
    #[test]
    fn prop_inverted_range_is_empty(
        stop in any::<i64>(),
        offset in 0_i64..1_000,
        step in any::<i64>(),
    ) {
        let start = stop.saturating_add(offset);
        let mut chain = range_step(start, stop, step);

        prop_assert_eq!(chain.next(), None);
    }

    /// A non-positive step never yields.
    #[test]
    fn prop_non_positive_step_is_empty(
        start in any::<i32>(),
        stop in any::<i32>(),
        step in i32::MIN..=0,
    ) {
        prop_assert_eq!(range_step(start, stop, step).count(), 0);
    }
}

// =============================================================================
// Exhaustion Laws
// =============================================================================

proptest! {
    /// Exhaustion is sticky for a full filter/map pipeline.
    #[test]
    fn prop_exhaustion_is_sticky(
        values in prop::collection::vec(any::<i32>(), 0..50),
        extra_pulls in 1_usize..10,
    ) {
        let mut chain = iter(&values)
            .filter(|x| **x % 3 != 0)
            .map(|x| i64::from(*x) * 2);

        while chain.next().is_some() {}

        for _ in 0..extra_pulls {
            prop_assert_eq!(chain.next(), None);
        }
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// filter then map agrees with the same filter and map over a plain sequence.
    #[test]
    fn prop_filter_map_equivalence(
        values in prop::collection::vec(any::<i32>(), 0..100),
        divisor in 1_i32..10,
    ) {
        let predicate = |x: &i32| x % divisor == 0;
        let transform = |x: i32| x.wrapping_mul(3).wrapping_sub(1);

        let expected: Vec<i32> = values
            .iter()
            .copied()
            .filter(|x| predicate(x))
            .map(transform)
            .collect();
        let actual = drain(iter(&values).filter(|x| predicate(*x)).map(|x| transform(*x)));

        prop_assert_eq!(actual, expected);
    }

    /// Two maps compose into one.
    #[test]
    fn prop_map_composition(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let first = |x: i16| i32::from(x) + 1;
        let second = |x: i32| x * 2;

        let chained = drain(iter(&values).map(|x| first(*x)).map(second));
        let composed = drain(iter(&values).map(|x| second(first(*x))));

        prop_assert_eq!(chained, composed);
    }

    /// Two filters compose into their conjunction.
    #[test]
    fn prop_filter_composition(values in prop::collection::vec(0_u32..1_000, 0..100)) {
        let chained = drain(iter(&values).filter(|x| **x % 2 == 0).filter(|x| **x > 300));
        let conjoined = drain(iter(&values).filter(|x| **x % 2 == 0 && **x > 300));

        prop_assert_eq!(chained, conjoined);
    }
}

// =============================================================================
// Terminal Laws
// =============================================================================

proptest! {
    /// find_first evaluates the predicate exactly up to the first match.
    #[test]
    fn prop_find_first_call_count(
        values in prop::collection::vec(0_u8..20, 0..100),
        target in 0_u8..20,
    ) {
        let calls = Cell::new(0_usize);
        let found = iter(&values).find_first(|x| {
            calls.set(calls.get() + 1);
            **x == target
        });

        let expected_calls = values
            .iter()
            .position(|x| *x == target)
            .map_or(values.len(), |index| index + 1);

        prop_assert_eq!(found.copied(), values.iter().copied().find(|x| *x == target));
        prop_assert_eq!(calls.get(), expected_calls);
    }

    /// sum matches the standard library sum, and an empty chain returns the start.
    #[test]
    fn prop_sum_matches_reference(
        values in prop::collection::vec(-1_000_i64..1_000, 0..100),
        start in -1_000_i64..1_000,
    ) {
        prop_assert_eq!(iter(&values).sum::<i64>(), values.iter().sum::<i64>());
        prop_assert_eq!(
            iter(&values).sum_from(start),
            start + values.iter().sum::<i64>()
        );
        prop_assert_eq!(iter(&values[..0]).sum_from(start), start);
    }

    /// join matches slice join for any separator.
    #[test]
    fn prop_join_matches_reference(
        parts in prop::collection::vec("[a-z]{0,5}", 0..20),
        separator in "[-,;| ]{0,3}",
    ) {
        prop_assert_eq!(iter(&parts).join(&separator), parts.join(separator.as_str()));
    }

    /// count, any and all agree with their std counterparts.
    #[test]
    fn prop_count_any_all_match_reference(
        values in prop::collection::vec(any::<u16>(), 0..100),
        threshold in any::<u16>(),
    ) {
        prop_assert_eq!(
            iter(&values).filter(|x| **x > threshold).count(),
            values.iter().filter(|x| **x > threshold).count()
        );
        prop_assert_eq!(
            iter(&values).any(|x| **x > threshold),
            values.iter().any(|x| *x > threshold)
        );
        prop_assert_eq!(
            iter(&values).all(|x| **x > threshold),
            values.iter().all(|x| *x > threshold)
        );
    }
}
