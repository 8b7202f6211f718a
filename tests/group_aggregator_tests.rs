use std::collections::HashMap;

use pretty_assertions::assert_eq;
use reportng::aggregate::group_aggregator::group_by_label;
use reportng::model::result_model::{Suite, TestMethod, TestRun};

use crate::common::builders::{method, passed};

mod common;

fn names(methods: &std::collections::BTreeSet<TestMethod>) -> Vec<String> {
    methods.iter().map(|m| m.qualified_name()).collect()
}

// ============================================================================
// 1. Labels and members sorted
// ============================================================================

#[test]
fn group_by_label_sorts_labels_and_methods() {
    let mut input: HashMap<String, Vec<TestMethod>> = HashMap::new();
    input.insert(
        "smoke".into(),
        vec![method("ClassB", "method2"), method("ClassA", "method1")],
    );
    input.insert(
        "fast".into(),
        vec![method("ClassA", "zeta"), method("ClassA", "alpha")],
    );
    input.insert("api".into(), vec![method("ClassC", "x")]);

    let grouped = group_by_label(input);
    let labels: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["api", "fast", "smoke"]);
    assert_eq!(names(&grouped["smoke"]), vec!["ClassA.method1", "ClassB.method2"]);
    assert_eq!(names(&grouped["fast"]), vec!["ClassA.alpha", "ClassA.zeta"]);
}

// ============================================================================
// 2. Empty groups are omitted
// ============================================================================

#[test]
fn group_by_label_omits_empty_groups() {
    let input = vec![
        ("empty".to_string(), Vec::<TestMethod>::new()),
        ("full".to_string(), vec![method("A", "a")]),
    ];
    let grouped = group_by_label(input);
    assert!(!grouped.contains_key("empty"));
    assert_eq!(grouped.len(), 1);
}

#[test]
fn group_by_label_all_empty_yields_empty_map() {
    let input = vec![("a", Vec::<TestMethod>::new()), ("b", Vec::new())];
    assert!(group_by_label(input).is_empty());
}

// ============================================================================
// 3. Duplicated membership gives the same output as deduplicated membership
// ============================================================================

#[test]
fn group_by_label_duplicates_collapse() {
    let deduped = vec![("smoke", vec![method("A", "a"), method("B", "b")])];
    let duplicated = vec![(
        "smoke",
        vec![
            method("B", "b"),
            method("A", "a"),
            method("B", "b"),
            method("A", "a").with_groups(["smoke"]),
        ],
    )];
    let from_deduped = group_by_label(deduped);
    let from_duplicated = group_by_label(duplicated);
    assert_eq!(from_deduped, from_duplicated);
    assert_eq!(from_duplicated["smoke"].len(), 2);
}

#[test]
fn group_by_label_merges_repeated_labels() {
    let input = vec![
        ("smoke", vec![method("A", "a")]),
        ("smoke", vec![method("B", "b"), method("A", "a")]),
    ];
    let grouped = group_by_label(input);
    assert_eq!(names(&grouped["smoke"]), vec!["A.a", "B.b"]);
}

// ============================================================================
// 4. Many-to-many membership
// ============================================================================

#[test]
fn group_by_label_method_in_several_groups() {
    let shared = method("A", "shared");
    let input = vec![
        ("one", vec![shared.clone()]),
        ("two", vec![shared.clone(), method("B", "b")]),
    ];
    let grouped = group_by_label(input);
    assert!(grouped["one"].contains(&shared));
    assert!(grouped["two"].contains(&shared));
}

// ============================================================================
// 5. Suite membership merges run mappings and method declarations
// ============================================================================

#[test]
fn suite_methods_by_groups_merges_sources() {
    let mut first = TestRun::new("first");
    first
        .groups
        .insert("db".into(), vec![method("Repo", "save")]);
    let mut declared = passed("Api", "get", 1);
    declared.method = declared.method.with_groups(["smoke", "db"]);
    first.passed_tests.push(declared);

    let mut second = TestRun::new("second");
    second
        .groups
        .insert("smoke".into(), vec![method("Api", "get"), method("Ui", "open")]);

    let suite = Suite::new("S").with_run(first).with_run(second);
    let grouped = group_by_label(suite.methods_by_groups());

    assert_eq!(names(&grouped["db"]), vec!["Api.get", "Repo.save"]);
    assert_eq!(names(&grouped["smoke"]), vec!["Api.get", "Ui.open"]);
}
