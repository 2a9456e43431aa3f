//! Resolution of key functions, predicates and sort keys.
//!
//! Every higher-order operation in this crate accepts either a function or a
//! declarative description. The two are told apart by type, not at runtime:
//!
//! - [`KeyFn`]: a closure `Fn(&T) -> K`, or a [`Field`] naming a record field
//! - [`Predicate`]: a closure `Fn(&T) -> bool`, a [`Spec`] (partial record
//!   matched with loose equality), or a [`Matcher`] holding either
//! - [`SortBy`]: any key function, or a [`SortKey`] carrying an explicit
//!   [`Order`]
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "record")] {
//! use sheaf::resolve::{field, mold, KeyFn, Spec};
//! use sheaf::record::Loose;
//! use serde_json::{json, Value};
//!
//! let people = vec![
//!     json!({"name": "ann", "team": "red"}),
//!     json!({"name": "bob", "team": "blue"}),
//! ];
//!
//! let on_red = mold(Spec::new().with("team", "red"));
//! let name = field("name");
//!
//! let names: Vec<Loose> = people
//!     .iter()
//!     .filter(|person: &&Value| on_red(*person))
//!     .map(|person| name.key(person))
//!     .collect();
//! assert_eq!(names, vec![Loose(json!("ann"))]);
//! # }
//! ```

mod key;
mod order;
mod predicate;

pub use key::KeyFn;
#[cfg(feature = "record")]
pub use key::{Field, field, field_of};

pub use order::{DESCENDING_MARKER, Order, ParseSortKeyError, SortBy, SortKey};

pub use predicate::{Predicate, resolve};
#[cfg(feature = "record")]
pub use predicate::{Matcher, Spec, mold};
