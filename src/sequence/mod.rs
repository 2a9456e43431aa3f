//! Operations over sequences.
//!
//! Every operation borrows its input slice and returns freshly allocated
//! results; inputs are never modified. Elements are cloned shallowly where a
//! result holds them.
//!
//! - [`map`], [`filter`], [`single`], [`reduce`], [`pluck`]: core iteration
//! - [`min`], [`max`], [`group`]: aggregates over extracted keys
//! - [`sort`]: stable decorate–sort–undecorate ordering
//! - [`amend`], [`amend_by`]: left-outer join of records (`record` feature)
//! - [`lay`], [`lay_from`], [`lay_by`]: half-open numeric ranges
//!
//! # Examples
//!
//! ```rust
//! use sheaf::sequence::{filter, map, reduce};
//!
//! let values = vec![1, 2, 3, 4, 5];
//!
//! let odd = filter(|value: &i32| value % 2 == 1, &values);
//! let squared = map(|value, _| value * value, &odd);
//! let total = reduce(|sum, value| sum + value, 0, &squared);
//!
//! assert_eq!(odd, vec![1, 3, 5]);
//! assert_eq!(total, 35);
//! ```

mod aggregate;
#[cfg(feature = "record")]
mod join;
mod range;
mod sort;

pub use aggregate::{group, max, min};
#[cfg(feature = "record")]
pub use join::{amend, amend_by};
pub use range::{Step, lay, lay_by, lay_from};
pub use sort::sort;

use crate::resolve::{KeyFn, Predicate};

/// Applies `function` to every element and its index.
///
/// The result has the same length and order as `sequence`.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::map;
///
/// let labels = map(|name, index| format!("{index}:{name}"), &["a", "b"]);
/// assert_eq!(labels, vec!["0:a", "1:b"]);
/// ```
pub fn map<T, U, F>(mut function: F, sequence: &[T]) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    sequence
        .iter()
        .enumerate()
        .map(|(index, element)| function(element, index))
        .collect()
}

/// Returns, in order, every element satisfying `predicate`.
///
/// `predicate` is a closure, a [`crate::resolve::Spec`] or a
/// [`crate::resolve::Matcher`]. No match yields an empty vector.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "record")] {
/// use sheaf::sequence::filter;
/// use sheaf::resolve::Spec;
/// use serde_json::json;
///
/// let numbers = filter(|value: &i32| *value > 1, &[1, 2, 3]);
/// assert_eq!(numbers, vec![2, 3]);
///
/// let rows = vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 1})];
/// assert_eq!(filter(Spec::new().with("a", 1), &rows).len(), 2);
/// # }
/// ```
pub fn filter<T, P>(predicate: P, sequence: &[T]) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    sequence
        .iter()
        .filter(|element| predicate.test(*element))
        .cloned()
        .collect()
}

/// Returns the first element satisfying `predicate`, or `None`.
///
/// The scan stops at the first match.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "record")] {
/// use sheaf::sequence::single;
/// use sheaf::resolve::Spec;
/// use serde_json::json;
///
/// let rows = vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 3})];
///
/// assert_eq!(single(Spec::new().with("a", 2), &rows), Some(&json!({"a": 2})));
/// assert_eq!(single(Spec::new().with("a", 4), &rows), None);
/// # }
/// ```
pub fn single<T, P>(predicate: P, sequence: &[T]) -> Option<&T>
where
    P: Predicate<T>,
{
    sequence.iter().find(|element| predicate.test(*element))
}

/// Folds `sequence` from left to right.
///
/// An empty sequence returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::reduce;
///
/// let joined = reduce(|text: String, word| text + *word, String::new(), &["a", "b"]);
/// assert_eq!(joined, "ab");
///
/// let untouched = reduce(|count: usize, _: &i32| count + 1, 7, &[]);
/// assert_eq!(untouched, 7);
/// ```
pub fn reduce<T, A, F>(function: F, initial: A, sequence: &[T]) -> A
where
    F: FnMut(A, &T) -> A,
{
    sequence.iter().fold(initial, function)
}

/// Extracts the key of every element.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "record")] {
/// use sheaf::sequence::pluck;
/// use sheaf::resolve::field;
/// use sheaf::record::Loose;
/// use serde_json::json;
///
/// let rows = vec![json!({"id": 1}), json!({"name": "x"})];
/// assert_eq!(pluck(field("id"), &rows), vec![Loose(json!(1)), Loose(json!(null))]);
///
/// assert_eq!(pluck(|text: &&str| text.len(), &["ab", "c"]), vec![2, 1]);
/// # }
/// ```
pub fn pluck<T, K>(key: K, sequence: &[T]) -> Vec<K::Key>
where
    K: KeyFn<T>,
{
    map(|element, _| key.key(element), sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_passes_index() {
        let indices = map(|_, index| index, &['x', 'y', 'z']);
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[rstest]
    fn map_keeps_length_and_order() {
        let values = vec![3, 1, 2];
        assert_eq!(map(|value, _| value * 10, &values), vec![30, 10, 20]);
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[rstest]
    fn map_empty() {
        let mapped: Vec<i32> = map(|value: &i32, _| *value, &[]);
        assert!(mapped.is_empty());
    }

    #[rstest]
    fn filter_keeps_order() {
        let values = vec![5, 2, 8, 1, 9];
        assert_eq!(filter(|value: &i32| *value > 4, &values), vec![5, 8, 9]);
    }

    #[rstest]
    fn filter_no_match_is_empty() {
        assert!(filter(|_: &i32| false, &[1, 2, 3]).is_empty());
    }

    #[rstest]
    fn single_returns_first_match() {
        let values = vec![(1, 'a'), (2, 'b'), (2, 'c')];
        assert_eq!(single(|pair: &(i32, char)| pair.0 == 2, &values), Some(&(2, 'b')));
    }

    #[rstest]
    fn single_stops_at_first_match() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let values = vec![1, 2, 3, 4];
        let found = single(
            |value: &i32| {
                calls.set(calls.get() + 1);
                *value == 2
            },
            &values,
        );
        assert_eq!(found, Some(&2));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn single_on_empty_is_none() {
        assert_eq!(single(|_: &i32| true, &[]), None);
    }

    #[rstest]
    fn reduce_is_left_fold() {
        let folded = reduce(|text: String, digit: &u8| format!("({text}{digit})"), String::new(), &[1, 2]);
        assert_eq!(folded, "((1)2)");
    }

    #[rstest]
    fn pluck_closure() {
        assert_eq!(pluck(|pair: &(u8, char)| pair.1, &[(1, 'a'), (2, 'b')]), vec!['a', 'b']);
    }
}
