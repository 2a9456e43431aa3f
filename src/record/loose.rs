//! Loose equality and ordering over field values.
//!
//! Declarative predicates and field keys compare values *loosely*: a number
//! and its textual form are equal, and booleans count as `1` and `0`. The rules
//! are fixed here instead of being borrowed from any host language:
//!
//! | left \ right | null | bool/number/string | array/object |
//! |---|---|---|---|
//! | null | equal | never equal | never equal |
//! | bool/number/string | never equal | numeric, unless both are strings | never equal |
//! | array/object | never equal | never equal | structural, element-wise loose |
//!
//! Strings coerce to numbers after trimming; an empty string is `0` and an
//! unparsable string is `NaN`, which equals nothing.
//!
//! Ordering compares two strings as text and everything else numerically.
//! `null`, `NaN`, arrays and objects are incomparable.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

/// A field value compared with loose equality and ordering.
///
/// `Loose` is the key type produced by [`crate::resolve::Field`], so sorting,
/// grouping and min/max by field name all follow the loose rules.
///
/// Its [`Display`](fmt::Display) form is the textual key used by
/// [`crate::sequence::group`]: strings without quotes, integral numbers
/// without a fraction, arrays joined by `,`.
///
/// # Examples
///
/// ```rust
/// use sheaf::record::Loose;
/// use serde_json::json;
///
/// assert_eq!(Loose(json!(2)), Loose(json!("2")));
/// assert_eq!(Loose(json!(true)), Loose(json!(1)));
/// assert_ne!(Loose(json!(null)), Loose(json!(0)));
/// assert!(Loose(json!(2)) < Loose(json!("10")));
/// assert!(Loose(json!("2")) > Loose(json!("10")));
/// assert_eq!(Loose(json!(4.0)).to_string(), "4");
/// ```
#[derive(Debug, Clone)]
pub struct Loose(pub Value);

impl Loose {
    /// Returns the wrapped value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Returns a reference to the wrapped value.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Loose {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl PartialEq for Loose {
    fn eq(&self, other: &Self) -> bool {
        loose_eq(&self.0, &other.0)
    }
}

impl PartialOrd for Loose {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        loose_cmp(&self.0, &other.0)
    }
}

impl fmt::Display for Loose {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_key(&self.0, formatter)
    }
}

fn write_key(value: &Value, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => formatter.write_str("null"),
        Value::Bool(flag) => write!(formatter, "{flag}"),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                write!(formatter, "{integer}")
            } else if let Some(integer) = number.as_u64() {
                write!(formatter, "{integer}")
            } else {
                write!(formatter, "{}", number.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(text) => formatter.write_str(text),
        Value::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    formatter.write_str(",")?;
                }
                write_key(element, formatter)?;
            }
            Ok(())
        }
        Value::Object(_) => write!(formatter, "{value}"),
    }
}

/// Numeric reading of a scalar; `None` for null, arrays and objects.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                Some(trimmed.parse().unwrap_or(f64::NAN))
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Compares two values with loose equality.
///
/// # Examples
///
/// ```rust
/// use sheaf::record::loose_eq;
/// use serde_json::json;
///
/// assert!(loose_eq(&json!(1), &json!("1")));
/// assert!(loose_eq(&json!(" 1.5 "), &json!(1.5)));
/// assert!(loose_eq(&json!(false), &json!("")));
/// assert!(loose_eq(&json!({"a": [1]}), &json!({"a": ["1"]})));
/// assert!(!loose_eq(&json!("abc"), &json!("abc ")));
/// assert!(!loose_eq(&json!(null), &json!(false)));
/// ```
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| loose_eq(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, left)| {
                    right
                        .get(key)
                        .is_some_and(|right| loose_eq(left, right))
                })
        }
        (Value::Null | Value::Array(_) | Value::Object(_), _)
        | (_, Value::Null | Value::Array(_) | Value::Object(_)) => false,
        _ => matches!(
            (to_number(left), to_number(right)),
            (Some(left), Some(right)) if left == right
        ),
    }
}

/// Orders two values loosely.
///
/// Two strings compare as text. Any other pair of scalars compares
/// numerically. Returns `None` when either side is `null`, an array, an
/// object, or reads as `NaN`, unless the two values are loosely equal.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use sheaf::record::loose_cmp;
/// use serde_json::json;
///
/// assert_eq!(loose_cmp(&json!(1), &json!(2)), Some(Ordering::Less));
/// assert_eq!(loose_cmp(&json!("b"), &json!("a")), Some(Ordering::Greater));
/// assert_eq!(loose_cmp(&json!("3"), &json!(3)), Some(Ordering::Equal));
/// assert_eq!(loose_cmp(&json!(null), &json!(0)), None);
/// assert_eq!(loose_cmp(&json!("x"), &json!(0)), None);
/// ```
pub fn loose_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    if loose_eq(left, right) {
        return Some(Ordering::Equal);
    }
    match (left, right) {
        (Value::String(left), Value::String(right)) => Some(left.cmp(right)),
        _ => to_number(left)?.partial_cmp(&to_number(right)?),
    }
}
