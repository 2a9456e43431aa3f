//! Stable sorting by extracted key.

use std::cmp::Ordering;

use crate::resolve::{Order, SortBy};

/// Returns the elements ordered by key.
///
/// `key` is a key function (ascending), a [`crate::resolve::Field`]
/// (ascending), or a [`crate::resolve::SortKey`] with an explicit
/// [`Order`]. Each key is extracted exactly once: elements are decorated
/// with their key, the pairs are sorted, and the keys are dropped again.
///
/// The sort is stable in both directions: elements with equal keys keep
/// their original relative order. Incomparable keys (`NaN`, mixed text and
/// numbers in loose field keys, and `null` from a missing field) are treated
/// as equal to their neighbour; the resulting order is unspecified but the
/// call never panics and every element is kept. A single missing field can
/// therefore leave its neighbours unsorted: ascending by `x` over
/// `[{x: 3}, {}, {x: 1}]` comes back unchanged. Filter such records out, or
/// sort with a key function that supplies a default, when a total order is
/// needed.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "record")] {
/// use sheaf::sequence::sort;
/// use sheaf::resolve::{field, SortKey};
/// use serde_json::json;
///
/// let people = vec![json!({"age": 1}), json!({"age": 3}), json!({"age": 2})];
///
/// let ascending = sort(field("age"), &people);
/// assert_eq!(ascending, vec![json!({"age": 1}), json!({"age": 2}), json!({"age": 3})]);
///
/// let descending = sort(SortKey::parse("-age").unwrap(), &people);
/// assert_eq!(descending, vec![json!({"age": 3}), json!({"age": 2}), json!({"age": 1})]);
///
/// let words = sort(|word: &&str| word.len(), &["ccc", "a", "bb"]);
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// # }
/// ```
pub fn sort<T, S>(key: S, sequence: &[T]) -> Vec<T>
where
    T: Clone,
    S: SortBy<T>,
{
    let order = key.direction();
    let decorated: Vec<(S::Key, &T)> = sequence
        .iter()
        .map(|element| (key.sort_key(element), element))
        .collect();

    merge_sort(decorated, &|(left, _), (right, _)| precedes(left, right, order))
        .into_iter()
        .map(|(_, element)| element.clone())
        .collect()
}

/// Whether `left` sorts strictly before `right` in `order`.
fn precedes<K: PartialOrd>(left: &K, right: &K, order: Order) -> bool {
    left.partial_cmp(right)
        .is_some_and(|ordering| order.apply(ordering) == Ordering::Less)
}

/// Top-down stable merge sort.
///
/// Only ever asks whether the right-hand candidate strictly precedes the
/// left-hand one, so equal and incomparable items keep their input order.
fn merge_sort<E, F>(mut items: Vec<E>, precedes: &F) -> Vec<E>
where
    F: Fn(&E, &E) -> bool,
{
    if items.len() <= 1 {
        return items;
    }
    let tail = items.split_off(items.len() / 2);
    let mut left = merge_sort(items, precedes).into_iter().peekable();
    let mut right = merge_sort(tail, precedes).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    while let (Some(head_left), Some(head_right)) = (left.peek(), right.peek()) {
        if precedes(head_right, head_left) {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
