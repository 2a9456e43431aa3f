//! Aggregates over extracted keys: min, max and group.

use std::cmp::Ordering;
use std::fmt::Display;

use super::reduce;
use crate::mapping::Mapping;
use crate::resolve::KeyFn;

/// Returns the element with the smallest key, or `None` for an empty sequence.
///
/// Keys are compared with `<` in a single left-to-right scan, so on ties the
/// first element wins. A single-element sequence returns that element.
/// Incomparable keys (such as `NaN`) never replace the current minimum.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "record")] {
/// use sheaf::sequence::min;
/// use sheaf::resolve::field;
/// use serde_json::json;
///
/// let points = vec![json!({"x": 3}), json!({"x": 1}), json!({"x": 1, "tie": true})];
/// assert_eq!(min(field("x"), &points), Some(&json!({"x": 1})));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(min(|value: &i32| *value, &empty), None);
/// # }
/// ```
pub fn min<T, K>(key: K, sequence: &[T]) -> Option<&T>
where
    K: KeyFn<T>,
    K::Key: PartialOrd,
{
    extreme(&key, sequence, Ordering::Less)
}

/// Returns the element with the largest key, or `None` for an empty sequence.
///
/// Keys are compared with `>` in a single left-to-right scan, so on ties the
/// first element wins.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::max;
///
/// let words = ["pear", "fig", "plum", "kiwi"];
/// assert_eq!(max(|word: &&str| word.len(), &words), Some(&"pear"));
/// ```
pub fn max<T, K>(key: K, sequence: &[T]) -> Option<&T>
where
    K: KeyFn<T>,
    K::Key: PartialOrd,
{
    extreme(&key, sequence, Ordering::Greater)
}

fn extreme<'a, T, K>(key: &K, sequence: &'a [T], wanted: Ordering) -> Option<&'a T>
where
    K: KeyFn<T>,
    K::Key: PartialOrd,
{
    let (first, rest) = sequence.split_first()?;
    let (best, _) = rest.iter().fold(
        (first, key.key(first)),
        |(best, best_key), element| {
            let candidate = key.key(element);
            if candidate.partial_cmp(&best_key) == Some(wanted) {
                (element, candidate)
            } else {
                (best, best_key)
            }
        },
    );
    Some(best)
}

/// Buckets elements by the textual form of their key.
///
/// Each bucket keeps its elements in their original relative order. Keys are
/// stringified with [`Display`], so keys that print alike share a bucket
/// (`4.0_f64` and `4_i32` both print as `"4"`).
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::group;
///
/// let groups = group(|value: &f64| value.floor(), &[4.2, 6.1, 6.4]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups["4"], vec![4.2]);
/// assert_eq!(groups["6"], vec![6.1, 6.4]);
/// ```
pub fn group<T, K>(key: K, sequence: &[T]) -> Mapping<Vec<T>>
where
    T: Clone,
    K: KeyFn<T>,
    K::Key: Display,
{
    reduce(
        |mut groups: Mapping<Vec<T>>, element| {
            groups
                .entry(key.key(element).to_string())
                .or_default()
                .push(element.clone());
            groups
        },
        Mapping::new(),
        sequence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn min_max_on_empty_are_none() {
        let empty: [i32; 0] = [];
        assert_eq!(min(|value: &i32| *value, &empty), None);
        assert_eq!(max(|value: &i32| *value, &empty), None);
    }

    #[rstest]
    fn min_max_on_single_element_return_it() {
        assert_eq!(min(|value: &i32| *value, &[7]), Some(&7));
        assert_eq!(max(|value: &i32| *value, &[7]), Some(&7));
    }

    #[rstest]
    fn ties_keep_first_seen() {
        let pairs = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        assert_eq!(min(|pair: &(i32, char)| pair.0, &pairs), Some(&(0, 'b')));
        assert_eq!(max(|pair: &(i32, char)| pair.0, &pairs), Some(&(1, 'a')));
    }

    #[rstest]
    fn nan_keys_are_skipped_after_the_seed() {
        let values = [2.0, f64::NAN, 1.0];
        assert_eq!(min(|value: &f64| *value, &values), Some(&1.0));
        assert_eq!(max(|value: &f64| *value, &values), Some(&2.0));
    }

    #[rstest]
    fn group_is_stable() {
        let words = ["apple", "bean", "avocado", "beet", "cherry"];
        let groups = group(|word: &&str| word.chars().next().unwrap_or(' '), &words);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups["a"], vec!["apple", "avocado"]);
        assert_eq!(groups["b"], vec!["bean", "beet"]);
        assert_eq!(groups["c"], vec!["cherry"]);
    }

    #[rstest]
    fn group_on_empty_is_empty() {
        let groups = group(|value: &i32| *value, &[]);
        assert!(groups.is_empty());
    }
}
