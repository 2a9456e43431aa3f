//! Records: string-keyed field maps backed by `serde_json`.
//!
//! A [`Record`] is the element type the declarative forms of every operation
//! work on. Field lookups never fail: an absent field reads as
//! [`Value::Null`], the single "missing value" sentinel of this crate.
//!
//! - [`FieldAccess`]: read a field by name
//! - [`Loose`]: loose equality and ordering over field values
//! - [`mixin`]: shallow merge, right side wins
//! - [`expand`]: lift the fields of a nested record into its parent
//!
//! # Examples
//!
//! ```rust
//! use sheaf::record::{FieldAccess, Record, Value};
//! use serde_json::json;
//!
//! let record: Record = json!({"name": "alice", "age": 30})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! assert_eq!(record.field("age"), &json!(30));
//! assert_eq!(record.field("missing"), &Value::Null);
//! ```

mod loose;
mod merge;

pub use loose::{Loose, loose_cmp, loose_eq};
pub use merge::{expand, mixin};

#[cfg(feature = "serde")]
pub use merge::to_record;

pub use serde_json::Value;

/// A record: an association of field names to values.
pub type Record = serde_json::Map<String, Value>;

static MISSING: Value = Value::Null;

/// Types whose fields can be read by name.
///
/// Lookups of absent fields return [`Value::Null`] instead of failing.
///
/// # Examples
///
/// ```rust
/// use sheaf::record::{FieldAccess, Value};
/// use serde_json::json;
///
/// let value = json!({"id": 7});
/// assert_eq!(value.field("id"), &json!(7));
///
/// // Scalars have no fields.
/// assert_eq!(json!(3).field("id"), &Value::Null);
/// ```
pub trait FieldAccess {
    /// Returns the value stored under `name`, or [`Value::Null`] if absent.
    fn field(&self, name: &str) -> &Value;
}

impl FieldAccess for Record {
    fn field(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(&MISSING)
    }
}

impl FieldAccess for Value {
    fn field(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(&MISSING)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, name: &str) -> &Value {
        (**self).field(name)
    }
}

static_assertions::assert_impl_all!(Record: Send, Sync);
static_assertions::assert_impl_all!(Loose: Send, Sync);
