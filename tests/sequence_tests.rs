//! Example-based tests for sequence operations on plain Rust values.

use rstest::rstest;
use sheaf::resolve::{Order, SortKey};
use sheaf::sequence::{
    filter, group, lay, lay_by, lay_from, map, max, min, pluck, reduce, single, sort,
};

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: &'static str,
    value: f64,
}

fn readings() -> Vec<Reading> {
    vec![
        Reading { sensor: "north", value: 4.5 },
        Reading { sensor: "south", value: 1.25 },
        Reading { sensor: "north", value: 9.0 },
        Reading { sensor: "east", value: 1.25 },
    ]
}

// =============================================================================
// lay
// =============================================================================

#[rstest]
fn lay_up_to_end() {
    assert_eq!(lay(5), vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn lay_from_start() {
    assert_eq!(lay_from(53, 50), vec![50, 51, 52]);
}

#[rstest]
fn lay_counting_down() {
    assert_eq!(lay_by(4, 8, -1), vec![8, 7, 6, 5]);
}

#[rstest]
fn lay_zero_step_is_empty() {
    assert_eq!(lay_by(5, 0, 0), Vec::<i32>::new());
}

// =============================================================================
// map / filter / reduce / single / pluck
// =============================================================================

#[rstest]
fn map_over_structs() {
    let labels = map(|reading, index| format!("{index}:{}", reading.sensor), &readings());
    assert_eq!(labels, vec!["0:north", "1:south", "2:north", "3:east"]);
}

#[rstest]
fn filter_then_reduce() {
    let all = readings();
    let north = filter(|reading: &Reading| reading.sensor == "north", &all);
    let total = reduce(|sum, reading| sum + reading.value, 0.0, &north);
    assert_eq!(north.len(), 2);
    assert!((total - 13.5).abs() < f64::EPSILON);
}

#[rstest]
fn reduce_empty_returns_initial() {
    let none: Vec<Reading> = Vec::new();
    assert_eq!(reduce(|count: u32, _| count + 1, 99, &none), 99);
}

#[rstest]
fn single_finds_first() {
    let all = readings();
    let found = single(|reading: &Reading| reading.value < 2.0, &all);
    assert_eq!(found.map(|reading| reading.sensor), Some("south"));
}

#[rstest]
fn single_absent() {
    let all = readings();
    assert_eq!(single(|reading: &Reading| reading.value > 100.0, &all), None);
}

#[rstest]
fn pluck_sensor_names() {
    assert_eq!(
        pluck(|reading: &Reading| reading.sensor, &readings()),
        vec!["north", "south", "north", "east"]
    );
}

// =============================================================================
// min / max / group
// =============================================================================

#[rstest]
fn min_max_by_value() {
    let all = readings();
    assert_eq!(min(|reading: &Reading| reading.value, &all).map(|r| r.sensor), Some("south"));
    assert_eq!(max(|reading: &Reading| reading.value, &all).map(|r| r.sensor), Some("north"));
}

#[rstest]
fn min_max_empty_is_none() {
    let none: Vec<Reading> = Vec::new();
    assert_eq!(min(|reading: &Reading| reading.value, &none), None);
    assert_eq!(max(|reading: &Reading| reading.value, &none), None);
}

#[rstest]
fn group_by_floor() {
    let groups = group(|value: &f64| value.floor(), &[4.2, 6.1, 6.4]);
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["4", "6"]);
    assert_eq!(groups["4"], vec![4.2]);
    assert_eq!(groups["6"], vec![6.1, 6.4]);
}

#[rstest]
fn group_by_sensor_keeps_order() {
    let groups = group(|reading: &Reading| reading.sensor, &readings());
    let north: Vec<f64> = groups["north"].iter().map(|reading| reading.value).collect();
    assert_eq!(north, vec![4.5, 9.0]);
}

// =============================================================================
// sort
// =============================================================================

#[rstest]
#[case(Order::Ascending, vec!["south", "east", "north", "north"])]
#[case(Order::Descending, vec!["north", "north", "south", "east"])]
fn sort_by_value_is_stable(#[case] order: Order, #[case] expected: Vec<&str>) {
    let sorted = sort(SortKey::new(|reading: &Reading| reading.value, order), &readings());
    let sensors: Vec<&str> = sorted.iter().map(|reading| reading.sensor).collect();
    assert_eq!(sensors, expected);
}

#[rstest]
fn sort_descending_keeps_equal_keys_in_input_order() {
    let sorted = sort(
        SortKey::descending(|reading: &Reading| reading.value),
        &readings(),
    );
    assert_eq!(sorted[2].sensor, "south");
    assert_eq!(sorted[3].sensor, "east");
}
