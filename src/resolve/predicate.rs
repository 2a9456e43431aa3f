//! Predicate resolution.
//!
//! Operations that select elements ([`crate::sequence::filter`],
//! [`crate::sequence::single`]) accept anything implementing [`Predicate`]:
//!
//! - any closure or function `Fn(&T) -> bool`
//! - a [`Spec`], the declarative form: a partial record whose fields must all
//!   loosely equal the candidate's fields
//! - a [`Matcher`], the tagged union of both, for callers that decide at
//!   runtime
//!
//! [`resolve`] and [`mold`] turn any of these into a plain closure.

#[cfg(feature = "record")]
use std::fmt;

#[cfg(feature = "record")]
use crate::record::{FieldAccess, Record, Value, loose_eq};

/// A boolean test over elements.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::Predicate;
///
/// let even = |value: &i32| value % 2 == 0;
/// assert!(even.test(&4));
/// assert!(!even.test(&3));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `element` satisfies the predicate.
    fn test(&self, element: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, element: &T) -> bool {
        self(element)
    }
}

/// Resolves any predicate into a closure.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::resolve;
///
/// let positive = resolve(|value: &i32| *value > 0);
/// assert!(positive(&1));
/// ```
pub fn resolve<T: ?Sized, P: Predicate<T>>(predicate: P) -> impl Fn(&T) -> bool {
    move |element: &T| predicate.test(element)
}

/// A declarative predicate: a partial record matched field by field.
///
/// A spec matches an element when every field the spec declares loosely
/// equals the element's field of the same name (see
/// [`crate::record::loose_eq`]). Fields the spec does not declare are
/// ignored. The empty spec matches everything.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::{Predicate, Spec};
/// use serde_json::json;
///
/// let spec = Spec::new().with("kind", "fruit").with("ripe", true);
///
/// assert!(spec.test(&json!({"kind": "fruit", "ripe": 1, "name": "fig"})));
/// assert!(!spec.test(&json!({"kind": "fruit"})));
/// assert!(Spec::new().test(&json!({"anything": 1})));
/// ```
#[cfg(feature = "record")]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spec {
    fields: Record,
}

#[cfg(feature = "record")]
impl Spec {
    /// Creates the empty spec, which matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this spec with one more required field.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the declared fields.
    pub const fn fields(&self) -> &Record {
        &self.fields
    }

    /// Returns `true` if the spec declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `element` matches every declared field.
    pub fn matches<T: FieldAccess + ?Sized>(&self, element: &T) -> bool {
        self.fields
            .iter()
            .all(|(name, expected)| loose_eq(element.field(name), expected))
    }
}

#[cfg(feature = "record")]
impl From<Record> for Spec {
    fn from(fields: Record) -> Self {
        Self { fields }
    }
}

#[cfg(feature = "record")]
impl TryFrom<Value> for Spec {
    type Error = Value;

    /// Builds a spec from a JSON object; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(other),
        }
    }
}

#[cfg(feature = "record")]
impl<T: FieldAccess + ?Sized> Predicate<T> for Spec {
    fn test(&self, element: &T) -> bool {
        self.matches(element)
    }
}

/// Resolves a spec into a closure over records.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::{mold, Spec};
/// use serde_json::{json, Value};
///
/// let is_admin = mold(Spec::new().with("role", "admin"));
/// assert!(is_admin(&json!({"role": "admin", "id": 1})));
/// assert!(!is_admin(&json!({"role": "guest"})));
/// # let _: &dyn Fn(&Value) -> bool = &is_admin;
/// ```
#[cfg(feature = "record")]
pub fn mold<T: FieldAccess + ?Sized>(spec: impl Into<Spec>) -> impl Fn(&T) -> bool {
    let spec = spec.into();
    move |element: &T| spec.matches(element)
}

/// Either a predicate function or a [`Spec`], chosen by the caller.
///
/// # Examples
///
/// ```rust
/// use sheaf::resolve::{Matcher, Predicate, Spec};
/// use serde_json::{json, Value};
///
/// let matchers: Vec<Matcher<'_, Value>> = vec![
///     Matcher::function(|record: &Value| record["id"].as_i64() > Some(1)),
///     Matcher::from(Spec::new().with("id", 2)),
/// ];
///
/// let record = json!({"id": 2});
/// assert!(matchers.iter().all(|matcher| matcher.test(&record)));
/// ```
#[cfg(feature = "record")]
pub enum Matcher<'a, T: ?Sized> {
    /// A predicate function.
    Function(Box<dyn Fn(&T) -> bool + 'a>),
    /// A declarative partial-record match.
    Spec(Spec),
}

#[cfg(feature = "record")]
impl<'a, T: ?Sized> Matcher<'a, T> {
    /// Wraps a predicate function.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self::Function(Box::new(function))
    }
}

#[cfg(feature = "record")]
impl<T: ?Sized> From<Spec> for Matcher<'_, T> {
    fn from(spec: Spec) -> Self {
        Self::Spec(spec)
    }
}

#[cfg(feature = "record")]
impl<T: FieldAccess + ?Sized> Predicate<T> for Matcher<'_, T> {
    fn test(&self, element: &T) -> bool {
        match self {
            Self::Function(function) => function(element),
            Self::Spec(spec) => spec.matches(element),
        }
    }
}

#[cfg(feature = "record")]
impl<T: ?Sized> fmt::Debug for Matcher<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => formatter.write_str("Matcher::Function(..)"),
            Self::Spec(spec) => formatter.debug_tuple("Matcher::Spec").field(spec).finish(),
        }
    }
}
