//! Sort direction and sort keys.
//!
//! [`crate::sequence::sort`] accepts anything implementing [`SortBy`]:
//!
//! - any key function `Fn(&T) -> K` with `K: PartialOrd`, ascending
//! - a [`crate::resolve::Field`], ascending
//! - a [`SortKey`], which pairs a key function with an explicit [`Order`]
//!
//! The textual form `"-age"` (descending by `age`) is accepted only at the
//! boundary, through [`SortKey::parse`].

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "record")]
use std::str::FromStr;

use super::KeyFn;

#[cfg(feature = "record")]
use super::Field;
#[cfg(feature = "record")]
use crate::record::{FieldAccess, Loose};

/// The prefix marking a descending field name.
pub const DESCENDING_MARKER: char = '-';

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl Order {
    /// Applies this direction to an ascending comparison result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use sheaf::resolve::Order;
    ///
    /// assert_eq!(Order::Ascending.apply(Ordering::Less), Ordering::Less);
    /// assert_eq!(Order::Descending.apply(Ordering::Less), Ordering::Greater);
    /// ```
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A key function paired with a sort direction.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::{Order, SortKey};
///
/// let newest_first = SortKey::descending(|year: &u32| *year);
/// assert_eq!(newest_first.order(), Order::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey<K> {
    key: K,
    order: Order,
}

impl<K> SortKey<K> {
    /// Creates a sort key with an explicit direction.
    pub const fn new(key: K, order: Order) -> Self {
        Self { key, order }
    }

    /// Creates an ascending sort key.
    pub const fn ascending(key: K) -> Self {
        Self::new(key, Order::Ascending)
    }

    /// Creates a descending sort key.
    pub const fn descending(key: K) -> Self {
        Self::new(key, Order::Descending)
    }

    /// Returns the key function.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the direction.
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Returns the same key with the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            key: self.key,
            order: self.order.reverse(),
        }
    }
}

#[cfg(feature = "record")]
impl SortKey<Field> {
    /// Parses a field name, optionally prefixed with `-` for descending order.
    ///
    /// Descending order reverses the loose comparison of the field; it does
    /// not negate the values. Two strings therefore compare as text in both
    /// directions, so `"-n"` over `"9"` and `"10"` yields `"9"` first.
    /// For numeric order, store numbers as numbers or pass
    /// [`SortKey::descending`] a key function that parses the text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSortKeyError`] if no field name remains after the
    /// optional marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheaf::resolve::{Order, SortKey};
    ///
    /// let key = SortKey::parse("-age").unwrap();
    /// assert_eq!(key.key().name(), "age");
    /// assert_eq!(key.order(), Order::Descending);
    ///
    /// assert_eq!(SortKey::parse("age").unwrap().order(), Order::Ascending);
    /// assert!(SortKey::parse("-").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseSortKeyError> {
        let (name, order) = match input.strip_prefix(DESCENDING_MARKER) {
            Some(name) => (name, Order::Descending),
            None => (input, Order::Ascending),
        };
        if name.is_empty() {
            return Err(ParseSortKeyError {
                input: input.to_owned(),
            });
        }
        tracing::trace!(field = name, ?order, "parsed sort key");
        Ok(Self::new(Field::new(name), order))
    }
}

#[cfg(feature = "record")]
impl FromStr for SortKey<Field> {
    type Err = ParseSortKeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

/// Error returned when a textual sort key names no field.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "record")] {
/// use sheaf::resolve::SortKey;
///
/// let error = SortKey::parse("").unwrap_err();
/// assert_eq!(error.to_string(), "invalid sort key \"\": missing field name");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "invalid sort key {:?}: missing field name",
            self.input
        )
    }
}

impl std::error::Error for ParseSortKeyError {}

/// A key function with a direction, as consumed by [`crate::sequence::sort`].
pub trait SortBy<T: ?Sized> {
    /// The extracted key type.
    type Key: PartialOrd;

    /// Extracts the key of `element`.
    fn sort_key(&self, element: &T) -> Self::Key;

    /// Returns the sort direction.
    fn direction(&self) -> Order {
        Order::Ascending
    }
}

impl<T: ?Sized, K, F> SortBy<T> for F
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    type Key = K;

    fn sort_key(&self, element: &T) -> K {
        self(element)
    }
}

#[cfg(feature = "record")]
impl<T: FieldAccess + ?Sized> SortBy<T> for Field {
    type Key = Loose;

    fn sort_key(&self, element: &T) -> Loose {
        self.key(element)
    }
}

impl<T: ?Sized, K> SortBy<T> for SortKey<K>
where
    K: KeyFn<T>,
    K::Key: PartialOrd,
{
    type Key = K::Key;

    fn sort_key(&self, element: &T) -> K::Key {
        self.key.key(element)
    }

    fn direction(&self) -> Order {
        self.order
    }
}
