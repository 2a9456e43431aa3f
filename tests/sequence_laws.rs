//! Property-based tests for the sequence operations.
//!
//! - **map**: identity and length preservation
//! - **filter**: every kept element satisfies the predicate, nothing else is lost
//! - **reduce**: agrees with a left fold
//! - **sort**: output is ordered, is a permutation of the input and is stable
//! - **min/max**: agree with the sorted extremes
//! - **lay**: length and membership

use proptest::prelude::*;
use sheaf::resolve::{Order, SortKey};
use sheaf::sequence::{filter, group, lay_by, map, max, min, reduce, single, sort};

fn tagged(values: &[i8]) -> Vec<(i8, usize)> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| (*value, index))
        .collect()
}

// =============================================================================
// map / filter / reduce / single
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity(values in prop::collection::vec(any::<i32>(), 0..50)) {
        prop_assert_eq!(map(|value, _| *value, &values), values);
    }

    #[test]
    fn prop_map_receives_positions(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let positions = map(|_, index| index, &values);
        prop_assert_eq!(positions, (0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_filter_keeps_exactly_matching(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let even = |value: &i32| value % 2 == 0;
        let kept = filter(even, &values);

        prop_assert!(kept.iter().all(even));
        prop_assert_eq!(kept.len(), values.iter().filter(|value| even(*value)).count());
    }

    #[test]
    fn prop_reduce_is_left_fold(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let sum = reduce(|sum: i64, value| sum + i64::from(*value), 0, &values);
        prop_assert_eq!(sum, values.iter().map(|value| i64::from(*value)).sum::<i64>());
    }

    #[test]
    fn prop_single_is_first_match(values in prop::collection::vec(any::<u8>(), 0..50), wanted in any::<u8>()) {
        let found = single(|value: &u8| *value >= wanted, &values);
        prop_assert_eq!(found, values.iter().find(|value| **value >= wanted));
    }
}

// =============================================================================
// sort / min / max / group
// =============================================================================

proptest! {
    #[test]
    fn prop_sort_orders_and_is_stable(values in prop::collection::vec(any::<i8>(), 0..60)) {
        let input = tagged(&values);
        let sorted = sort(|(value, _): &(i8, usize)| *value, &input);

        let mut expected = input.clone();
        expected.sort_by_key(|(value, _)| *value);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_sort_descending_is_stable(values in prop::collection::vec(any::<i8>(), 0..60)) {
        let input = tagged(&values);
        let sorted = sort(SortKey::new(|(value, _): &(i8, usize)| *value, Order::Descending), &input);

        let mut expected = input.clone();
        expected.sort_by(|(left, _), (right, _)| right.cmp(left));
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_sort_with_nan_keeps_every_element(values in prop::collection::vec(prop::num::f64::ANY, 0..40)) {
        let sorted = sort(|value: &f64| *value, &values);
        prop_assert_eq!(sorted.len(), values.len());
    }

    #[test]
    fn prop_min_max_match_sorted_ends(values in prop::collection::vec(any::<i8>(), 1..40)) {
        let input = tagged(&values);
        let sorted = sort(|(value, _): &(i8, usize)| *value, &input);

        prop_assert_eq!(min(|(value, _): &(i8, usize)| *value, &input), sorted.first());
        prop_assert_eq!(
            max(|(value, _): &(i8, usize)| *value, &input).map(|(value, _)| *value),
            sorted.last().map(|(value, _)| *value)
        );
    }

    #[test]
    fn prop_group_partitions_input(values in prop::collection::vec(0_u8..10, 0..60)) {
        let groups = group(|value: &u8| value % 3, &values);

        prop_assert_eq!(groups.values().map(Vec::len).sum::<usize>(), values.len());
        for (key, members) in &groups {
            prop_assert!(members.iter().all(|value| (value % 3).to_string() == *key));
        }
    }
}

// =============================================================================
// lay
// =============================================================================

proptest! {
    #[test]
    fn prop_lay_by_length_and_bounds(end in -100_i32..100, start in -100_i32..100, step in 1_i32..10) {
        let ascending = lay_by(end, start, step);
        let expected_len = if end > start { (end - start + step - 1) / step } else { 0 };

        prop_assert_eq!(ascending.len(), usize::try_from(expected_len).unwrap());
        prop_assert!(ascending.iter().all(|value| *value >= start && *value < end));
        prop_assert!(ascending.windows(2).all(|pair| pair[1] - pair[0] == step));

        let descending = lay_by(start, end, -step);
        prop_assert!(descending.iter().all(|value| *value <= end && *value > start));
    }
}
