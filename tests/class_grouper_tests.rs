use pretty_assertions::assert_eq;
use reportng::aggregate::class_grouper::{group_by_class, insert_sorted};
use reportng::model::ordering::compare_outcomes;
use reportng::model::result_model::{TestClass, TestOutcome, TestStatus};

use crate::common::builders::{failed, outcome, passed, skipped};

mod common;

fn method_names(outcomes: &[TestOutcome]) -> Vec<&str> {
    outcomes.iter().map(|o| o.method.name.as_str()).collect()
}

// ============================================================================
// 1. Empty input
// ============================================================================

#[test]
fn group_by_class_empty_input_is_empty() {
    let empty: Vec<TestOutcome> = Vec::new();
    let grouped = group_by_class(&empty);
    assert!(grouped.is_empty());
}

// ============================================================================
// 2. Keys are alphabetical regardless of insertion order
// ============================================================================

#[test]
fn group_by_class_keys_alphabetical() {
    let outcomes = vec![
        passed("com.zeta.ZTest", "a", 1),
        passed("com.alpha.ATest", "b", 2),
        passed("com.mid.MTest", "c", 3),
        passed("com.alpha.ATest", "d", 4),
    ];
    let grouped = group_by_class(&outcomes);
    let keys: Vec<&str> = grouped.keys().map(|c| c.name.as_str()).collect();
    assert_eq!(keys, vec!["com.alpha.ATest", "com.mid.MTest", "com.zeta.ZTest"]);
    assert_eq!(grouped[&TestClass::new("com.alpha.ATest")].len(), 2);
}

// ============================================================================
// 3. Values sorted by start time, then method name
// ============================================================================

#[test]
fn group_by_class_values_sorted_by_start_then_name() {
    let outcomes = vec![
        passed("Cls", "late", 30),
        passed("Cls", "zeta", 10),
        passed("Cls", "alpha", 10),
        passed("Cls", "early", 5),
    ];
    let grouped = group_by_class(&outcomes);
    let values = &grouped[&TestClass::new("Cls")];
    assert_eq!(method_names(values), vec!["early", "alpha", "zeta", "late"]);
    assert!(
        values
            .windows(2)
            .all(|w| compare_outcomes(&w[0], &w[1]) != std::cmp::Ordering::Greater)
    );
}

// ============================================================================
// 4. Identical duplicates collapse
// ============================================================================

#[test]
fn group_by_class_drops_identical_duplicates() {
    let record = failed("Cls", "flaky", 7);
    let outcomes = vec![record.clone(), passed("Cls", "other", 1), record.clone(), record];
    let grouped = group_by_class(&outcomes);
    let values = &grouped[&TestClass::new("Cls")];
    assert_eq!(method_names(values), vec!["other", "flaky"]);
}

// ============================================================================
// 5. Distinct invocations that tie under the ordering are kept in arrival order
// ============================================================================

#[test]
fn group_by_class_keeps_distinct_tied_invocations() {
    let mut first = passed("Cls", "param", 5);
    first.parameters = vec!["1".into()];
    let mut second = passed("Cls", "param", 5);
    second.parameters = vec!["2".into()];
    let mut third = passed("Cls", "param", 5);
    third.parameters = vec!["3".into()];

    let grouped = group_by_class(&vec![second.clone(), first.clone(), third.clone(), first.clone()]);
    let values = &grouped[&TestClass::new("Cls")];
    assert_eq!(values, &vec![second, first, third]);
}

// ============================================================================
// 6. Same method, different status is not a duplicate
// ============================================================================

#[test]
fn group_by_class_same_method_different_status_kept() {
    let outcomes = vec![
        outcome("Cls", "retry", TestStatus::Failed, 3),
        outcome("Cls", "retry", TestStatus::Passed, 3),
    ];
    let grouped = group_by_class(&outcomes);
    assert_eq!(grouped[&TestClass::new("Cls")].len(), 2);
    assert_eq!(grouped[&TestClass::new("Cls")][0].status, TestStatus::Failed);
}

// ============================================================================
// 7. Stable across repeated runs and input permutations of distinct keys
// ============================================================================

#[test]
fn group_by_class_deterministic() {
    let outcomes = vec![
        skipped("B", "s", 4),
        passed("A", "p", 2),
        failed("B", "f", 1),
        passed("A", "q", 1),
    ];
    let mut reversed = outcomes.clone();
    reversed.reverse();

    let first = group_by_class(&outcomes);
    let second = group_by_class(&outcomes);
    let from_reversed = group_by_class(&reversed);
    assert_eq!(first, second);
    assert_eq!(first, from_reversed);
}

// ============================================================================
// 8. insert_sorted on plain values
// ============================================================================

#[test]
fn insert_sorted_uses_insertion_point() {
    let mut items = vec![1, 3, 5];
    insert_sorted(&mut items, &4, |a: &i32, b: &i32| a.cmp(b));
    insert_sorted(&mut items, &0, |a: &i32, b: &i32| a.cmp(b));
    insert_sorted(&mut items, &9, |a: &i32, b: &i32| a.cmp(b));
    assert_eq!(items, vec![0, 1, 3, 4, 5, 9]);
}

#[test]
fn insert_sorted_rejects_equal_item() {
    let mut items = vec![1, 3, 5];
    insert_sorted(&mut items, &3, |a: &i32, b: &i32| a.cmp(b));
    assert_eq!(items, vec![1, 3, 5]);
}

#[test]
fn insert_sorted_ties_go_after_tied_run() {
    // Compare only on the first element; second element tracks arrival.
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    let mut items = vec![(1, 'a'), (2, 'b'), (2, 'c'), (3, 'd')];
    insert_sorted(&mut items, &(2, 'e'), by_key);
    assert_eq!(items, vec![(1, 'a'), (2, 'b'), (2, 'c'), (2, 'e'), (3, 'd')]);
    insert_sorted(&mut items, &(2, 'c'), by_key);
    assert_eq!(items.len(), 5);
}
