//! Key extraction.

#[cfg(feature = "record")]
use crate::record::{FieldAccess, Loose, Value};

/// Extracts a key from an element.
///
/// Every `Fn(&T) -> K` is a key function. With the `record` feature,
/// [`Field`] extracts a named field from anything implementing
/// [`FieldAccess`].
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::KeyFn;
///
/// let length = |text: &String| text.len();
/// assert_eq!(length.key(&"four".to_string()), 4);
/// ```
pub trait KeyFn<T: ?Sized> {
    /// The extracted key type.
    type Key;

    /// Extracts the key of `element`.
    fn key(&self, element: &T) -> Self::Key;
}

impl<T: ?Sized, K, F> KeyFn<T> for F
where
    F: Fn(&T) -> K,
{
    type Key = K;

    #[inline]
    fn key(&self, element: &T) -> K {
        self(element)
    }
}

/// A key function reading one field by name.
///
/// Extracted keys are [`Loose`] values, so fields compare and group with
/// loose semantics. An absent field extracts as `null`.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::{field, KeyFn};
/// use sheaf::record::Loose;
/// use serde_json::json;
///
/// let age = field("age");
/// assert_eq!(age.key(&json!({"age": 30})), Loose(json!(30)));
/// assert_eq!(age.key(&json!({})), Loose(json!(null)));
/// ```
#[cfg(feature = "record")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    name: String,
}

#[cfg(feature = "record")]
impl Field {
    /// Creates a key function for the field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the field value of `element`.
    pub fn get<'a, T: FieldAccess + ?Sized>(&self, element: &'a T) -> &'a Value {
        element.field(&self.name)
    }
}

#[cfg(feature = "record")]
impl<T: FieldAccess + ?Sized> KeyFn<T> for Field {
    type Key = Loose;

    fn key(&self, element: &T) -> Loose {
        Loose(self.get(element).clone())
    }
}

/// Returns a key function reading the field `name`.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::field;
///
/// assert_eq!(field("age").name(), "age");
/// ```
#[cfg(feature = "record")]
pub fn field(name: impl Into<String>) -> Field {
    Field::new(name)
}

/// Reads the field `name` of `element` directly.
///
/// This is the two-argument shortcut for `field(name)` applied to
/// `element`; an absent field reads as `null`.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::field_of;
/// use serde_json::json;
///
/// let record = json!({"id": 1});
/// assert_eq!(field_of("id", &record), json!(1));
/// assert_eq!(field_of("name", &record), json!(null));
/// ```
#[cfg(feature = "record")]
pub fn field_of<T: FieldAccess + ?Sized>(name: &str, element: &T) -> Value {
    element.field(name).clone()
}
