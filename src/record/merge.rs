//! Shallow merging of records.

use serde_json::Value;

use super::Record;

/// Merges two records into a new one; on shared fields `right` wins.
///
/// The merge is shallow: nested records are replaced, not merged. Neither
/// input is modified.
///
/// # Examples
///
/// ```rust
/// use sheaf::record::{mixin, Record};
/// use serde_json::json;
///
/// let left: Record = json!({"a": 1, "b": 1}).as_object().cloned().unwrap();
/// let right: Record = json!({"a": 9}).as_object().cloned().unwrap();
///
/// let merged = mixin(&left, &right);
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": 9, "b": 1}));
/// assert_eq!(left["a"], json!(1));
/// ```
pub fn mixin(left: &Record, right: &Record) -> Record {
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// Lifts the fields of the nested record stored under `name` into each record.
///
/// For every record whose `name` field holds an object, the result is the
/// record without `name`, shallow-merged with that object (nested fields win
/// on collision). Records whose `name` field is absent or not an object are
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use sheaf::record::{expand, Record};
/// use serde_json::json;
///
/// let rows: Vec<Record> = vec![
///     json!({"id": 1, "meta": {"tag": "x"}}).as_object().cloned().unwrap(),
///     json!({"id": 2}).as_object().cloned().unwrap(),
/// ];
///
/// let expanded = expand("meta", &rows);
/// assert_eq!(serde_json::Value::Object(expanded[0].clone()), json!({"id": 1, "tag": "x"}));
/// assert_eq!(expanded[1], rows[1]);
/// ```
pub fn expand(name: &str, records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .map(|record| match record.get(name) {
            Some(Value::Object(nested)) => {
                let mut base = record.clone();
                base.remove(name);
                mixin(&base, nested)
            }
            _ => record.clone(),
        })
        .collect()
}

/// Converts any serializable value into a [`Record`].
///
/// Returns `None` if the value does not serialize to a JSON object.
///
/// # Examples
///
/// ```rust
/// use sheaf::record::to_record;
/// use serde::Serialize;
/// use serde_json::json;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let record = to_record(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(record["x"], json!(1));
/// assert!(to_record(&42).is_none());
/// ```
#[cfg(feature = "serde")]
pub fn to_record<T: serde::Serialize + ?Sized>(value: &T) -> Option<Record> {
    match serde_json::to_value(value) {
        Ok(Value::Object(record)) => Some(record),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[rstest]
    fn mixin_right_wins() {
        let left = record(json!({"a": 1, "b": 1}));
        let right = record(json!({"a": 9}));
        assert_eq!(mixin(&left, &right), record(json!({"a": 9, "b": 1})));
    }

    #[rstest]
    fn mixin_leaves_inputs_untouched() {
        let left = record(json!({"a": 1}));
        let right = record(json!({"b": 2}));
        let _ = mixin(&left, &right);
        assert_eq!(left, record(json!({"a": 1})));
        assert_eq!(right, record(json!({"b": 2})));
    }

    #[rstest]
    fn mixin_is_shallow() {
        let left = record(json!({"n": {"x": 1, "y": 1}}));
        let right = record(json!({"n": {"x": 2}}));
        assert_eq!(mixin(&left, &right), record(json!({"n": {"x": 2}})));
    }

    #[rstest]
    fn mixin_with_empty_sides() {
        let some = record(json!({"a": 1}));
        assert_eq!(mixin(&some, &Record::new()), some);
        assert_eq!(mixin(&Record::new(), &some), some);
    }

    #[rstest]
    fn expand_nested_fields_override_parent() {
        let rows = vec![record(json!({"id": 1, "name": "outer", "inner": {"name": "inner"}}))];
        let expanded = expand("inner", &rows);
        assert_eq!(expanded, vec![record(json!({"id": 1, "name": "inner"}))]);
    }

    #[rstest]
    #[case(json!({"id": 1}))]
    #[case(json!({"id": 1, "inner": 5}))]
    #[case(json!({"id": 1, "inner": [1, 2]}))]
    fn expand_passes_through_non_objects(#[case] row: Value) {
        let rows = vec![record(row)];
        assert_eq!(expand("inner", &rows), rows);
    }
}
