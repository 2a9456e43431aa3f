//! Left-outer join of record sequences.

use super::{map, single};
use crate::record::{FieldAccess, Record, loose_eq, mixin};

/// Enriches each `left` record with the first `right` record sharing its `key`.
///
/// Equivalent to [`amend_by`] with the same field name on both sides.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::amend;
/// use sheaf::record::Record;
/// use serde_json::{json, Value};
///
/// fn records(value: Value) -> Vec<Record> {
///     serde_json::from_value(value).unwrap()
/// }
///
/// let left = records(json!([{"id": 1, "b": 2}, {"id": 2, "b": 2}]));
/// let right = records(json!([{"id": 1, "d": 4}]));
///
/// assert_eq!(
///     amend(&left, &right, "id"),
///     records(json!([{"id": 1, "b": 2, "d": 4}, {"id": 2, "b": 2}])),
/// );
/// ```
pub fn amend(left: &[Record], right: &[Record], key: &str) -> Vec<Record> {
    amend_by(left, right, key, key)
}

/// Enriches each `left` record with the first `right` record whose
/// `right_key` field loosely equals its `left_key` field.
///
/// This is a left-outer join: the result has exactly the length and order
/// of `left`. A matched record is shallow-merged with its partner, the
/// partner's fields winning on collision. An unmatched record passes through
/// unchanged. Later `right` records with the same key are never consulted.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::amend_by;
/// use sheaf::record::Record;
/// use serde_json::{json, Value};
///
/// fn records(value: Value) -> Vec<Record> {
///     serde_json::from_value(value).unwrap()
/// }
///
/// let orders = records(json!([{"order": 10, "customer": "7"}]));
/// let customers = records(json!([{"id": 7, "name": "ada"}]));
///
/// let joined = amend_by(&orders, &customers, "customer", "id");
/// assert_eq!(joined[0]["name"], json!("ada"));
/// assert_eq!(joined[0]["id"], json!(7));
/// ```
pub fn amend_by(
    left: &[Record],
    right: &[Record],
    left_key: &str,
    right_key: &str,
) -> Vec<Record> {
    let unmatched_partner = Record::new();
    let mut unmatched = 0_usize;

    let joined = map(
        |element, _| {
            let wanted = element.field(left_key);
            let partner = single(
                |candidate: &Record| loose_eq(candidate.field(right_key), wanted),
                right,
            );
            if partner.is_none() {
                unmatched += 1;
            }
            mixin(element, partner.unwrap_or(&unmatched_partner))
        },
        left,
    );

    tracing::debug!(
        left_key,
        right_key,
        rows = left.len(),
        unmatched,
        "amended records"
    );
    joined
}
