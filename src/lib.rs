//! # sheaf
//!
//! A small functional toolkit for transforming sequences and string-keyed
//! mappings: filtering, mapping, reducing, grouping, sorting, joining,
//! ranging and shallow merging.
//!
//! ## Overview
//!
//! Every higher-order operation accepts either a function or a declarative
//! description of one:
//!
//! - a key function `Fn(&T) -> K`, or a [`resolve::Field`] naming a field
//! - a predicate `Fn(&T) -> bool`, or a [`resolve::Spec`] (a partial record
//!   whose fields must all match, with loose equality)
//!
//! The choice is made by the type of the argument, so the same operation
//! serves plain Rust values and dynamic [`record::Record`]s.
//!
//! All operations are pure functions: inputs are borrowed and never
//! modified, results are freshly allocated, and empty inputs produce defined
//! results (`None`, an empty vector, or the initial accumulator) instead of
//! panicking.
//!
//! ## Modules
//!
//! - [`sequence`]: map, filter, single, reduce, pluck, min, max, group, sort,
//!   amend, lay
//! - [`mapping`]: collect, taper, `map_values`, abate
//! - [`resolve`]: key functions, predicates, sort keys
//! - [`record`]: records, loose comparison, mixin, expand
//!
//! ## Feature Flags
//!
//! - `record` (default): `serde_json`-backed records and the declarative
//!   forms (`Field`, `Spec`, `Matcher`), plus `amend`, `mixin`, `expand`
//! - `serde`: serialization of sort keys and `to_record`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "record")] {
//! use sheaf::prelude::*;
//! use serde_json::json;
//!
//! let people: Vec<Record> = serde_json::from_value(json!([
//!     {"name": "ann", "team": "red", "age": 31},
//!     {"name": "bob", "team": "blue", "age": 27},
//!     {"name": "cid", "team": "red", "age": 25},
//! ]))
//! .unwrap();
//!
//! let red = filter(Spec::new().with("team", "red"), &people);
//! let youngest_first = sort(field("age"), &red);
//! assert_eq!(youngest_first[0]["name"], json!("cid"));
//!
//! let by_team = group(field("team"), &people);
//! assert_eq!(by_team["red"].len(), 2);
//!
//! let oldest = max(field("age"), &people).unwrap();
//! assert_eq!(oldest["name"], json!("ann"));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation and the types needed to call them.
///
/// # Usage
///
/// ```rust
/// use sheaf::prelude::*;
/// ```
pub mod prelude {
    pub use crate::mapping::*;
    pub use crate::resolve::*;
    pub use crate::sequence::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;
}

pub mod mapping;
pub mod resolve;
pub mod sequence;

#[cfg(feature = "record")]
pub mod record;
