//! Operations over mappings.
//!
//! A [`Mapping`] associates string keys with values. The enumerating
//! operations ([`collect`], [`taper`], [`abate`]) accept anything that
//! iterates as `(key, value)` pairs, so they work on `&Mapping<V>`, on a
//! `&Record` (with the `record` feature) and on any other map alike. Order
//! follows the map's own enumeration order; for [`Mapping`] that is key
//! order.
//!
//! Functions receive the value first and the key second.
//!
//! # Examples
//!
//! ```rust
//! use sheaf::mapping::{collect, map_values, taper, Mapping};
//!
//! let stock = Mapping::from([
//!     ("apples".to_string(), 3),
//!     ("pears".to_string(), 5),
//! ]);
//!
//! let lines = collect(|count, fruit| format!("{fruit}={count}"), &stock);
//! assert_eq!(lines, vec!["apples=3", "pears=5"]);
//!
//! let total = taper(|sum, count, _| sum + count, 0, &stock);
//! assert_eq!(total, 8);
//!
//! let doubled = map_values(|count| count * 2, &stock);
//! assert_eq!(doubled["pears"], 10);
//! ```

use std::collections::BTreeMap;

/// String-keyed association of values.
pub type Mapping<V> = BTreeMap<String, V>;

/// Applies `function` to every `(value, key)` entry, collecting the results.
///
/// # Examples
///
/// ```rust
/// use sheaf::mapping::{collect, Mapping};
///
/// let ages = Mapping::from([("ann".to_string(), 31), ("bob".to_string(), 27)]);
/// assert_eq!(collect(|age, _| *age, &ages), vec![31, 27]);
/// ```
pub fn collect<K, V, U, M, F>(mut function: F, mapping: M) -> Vec<U>
where
    M: IntoIterator<Item = (K, V)>,
    F: FnMut(V, K) -> U,
{
    mapping
        .into_iter()
        .map(|(key, value)| function(value, key))
        .collect()
}

/// Folds over every `(value, key)` entry.
///
/// An empty mapping returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use sheaf::mapping::{taper, Mapping};
///
/// let sizes = Mapping::from([("a".to_string(), 2), ("b".to_string(), 3)]);
/// let keys = taper(|keys: String, _, key: &String| keys + key, String::new(), &sizes);
/// assert_eq!(keys, "ab");
/// ```
pub fn taper<K, V, A, M, F>(mut function: F, initial: A, mapping: M) -> A
where
    M: IntoIterator<Item = (K, V)>,
    F: FnMut(A, V, K) -> A,
{
    mapping
        .into_iter()
        .fold(initial, |accumulator, (key, value)| {
            function(accumulator, value, key)
        })
}

/// Returns a new map with the same keys and every value transformed.
///
/// Accepts anything that iterates as borrowed `(key, value)` pairs, so a
/// `&Record` maps to a `Mapping` as well.
///
/// # Examples
///
/// ```rust
/// use sheaf::mapping::{map_values, Mapping};
///
/// let names = Mapping::from([("x".to_string(), "ada")]);
/// let lengths = map_values(|name| name.len(), &names);
/// assert_eq!(lengths, Mapping::from([("x".to_string(), 3)]));
/// ```
pub fn map_values<'a, V, U, M, F>(mut function: F, mapping: M) -> Mapping<U>
where
    V: 'a,
    M: IntoIterator<Item = (&'a String, &'a V)>,
    F: FnMut(&V) -> U,
{
    mapping
        .into_iter()
        .map(|(key, value)| (key.clone(), function(value)))
        .collect()
}

/// Applies `function` to every `(value, key)` entry and concatenates the
/// returned sequences in enumeration order.
///
/// # Examples
///
/// ```rust
/// use sheaf::mapping::{abate, Mapping};
///
/// let tags = Mapping::from([
///     ("a".to_string(), vec![1, 2]),
///     ("b".to_string(), vec![]),
///     ("c".to_string(), vec![3]),
/// ]);
/// assert_eq!(abate(|values, _| values.clone(), &tags), vec![1, 2, 3]);
/// ```
pub fn abate<K, V, U, M, I, F>(mut function: F, mapping: M) -> Vec<U>
where
    M: IntoIterator<Item = (K, V)>,
    I: IntoIterator<Item = U>,
    F: FnMut(V, K) -> I,
{
    mapping
        .into_iter()
        .flat_map(|(key, value)| function(value, key))
        .collect()
}
