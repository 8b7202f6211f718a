use pretty_assertions::assert_eq;
use reportng::aggregate::class_grouper::group_by_class;
use reportng::aggregate::statistics::{RunStatistics, percentage};
use reportng::model::result_model::TestRun;

use crate::common::builders::{failed, passed, scenario_run, skipped};

mod common;

// ============================================================================
// 1. Zero total never divides
// ============================================================================

#[test]
fn statistics_zero_total_all_zero() {
    let stats = RunStatistics::from_counts(0, 0, 0);
    assert_eq!(stats.total, 0);
    assert_eq!(
        (stats.passed_pct, stats.failed_pct, stats.skipped_pct),
        (0, 0, 0)
    );
}

#[test]
fn statistics_empty_run() {
    let stats = RunStatistics::for_run(&TestRun::new("empty"));
    assert_eq!(stats, RunStatistics::default());
}

// ============================================================================
// 2. Exact shares
// ============================================================================

#[test]
fn statistics_seven_two_one() {
    let stats = RunStatistics::from_counts(7, 2, 1);
    assert_eq!(stats.total, 10);
    assert_eq!(
        (stats.passed_pct, stats.failed_pct, stats.skipped_pct),
        (70, 20, 10)
    );
}

// ============================================================================
// 3. Truncation is not redistributed
// ============================================================================

#[test]
fn statistics_thirds_truncate_to_99() {
    let stats = RunStatistics::from_counts(1, 1, 1);
    assert_eq!(
        (stats.passed_pct, stats.failed_pct, stats.skipped_pct),
        (33, 33, 33)
    );
    assert_eq!(stats.passed_pct + stats.failed_pct + stats.skipped_pct, 99);
}

#[test]
fn percentage_floors() {
    assert_eq!(percentage(2, 3), 66);
    assert_eq!(percentage(1, 7), 14);
    assert_eq!(percentage(5, 5), 100);
    assert_eq!(percentage(3, 0), 0);
}

// ============================================================================
// 4. Run buckets and configuration buckets
// ============================================================================

#[test]
fn statistics_for_run_counts_test_buckets() {
    let stats = RunStatistics::for_run(&scenario_run());
    assert_eq!((stats.passed, stats.failed, stats.skipped, stats.total), (1, 1, 1, 3));
    assert_eq!(stats.passed_pct, 33);
}

#[test]
fn statistics_ignore_configuration_buckets() {
    let mut run = TestRun::new("config heavy");
    run.passed_tests = vec![passed("A", "a", 1)];
    run.failed_configurations = vec![failed("A", "setUp", 0)];
    run.skipped_configurations = vec![skipped("A", "tearDown", 9)];
    let stats = RunStatistics::for_run(&run);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.passed_pct, 100);
    assert!(!stats.has_failures());
}

// ============================================================================
// 5. Combining recomputes shares
// ============================================================================

#[test]
fn statistics_combine_recomputes_percentages() {
    let combined = RunStatistics::combine([
        RunStatistics::from_counts(1, 1, 1),
        RunStatistics::from_counts(6, 1, 0),
    ]);
    assert_eq!(combined, RunStatistics::from_counts(7, 2, 1));
    assert_eq!(combined.passed_pct, 70);
}

#[test]
fn statistics_combine_nothing() {
    let combined = RunStatistics::combine(Vec::new());
    assert_eq!(combined.total, 0);
    assert_eq!(combined.failed_pct, 0);
}

// ============================================================================
// 6. Records reached twice count once
// ============================================================================

#[test]
fn statistics_count_duplicated_record_once() {
    let record = passed("Cls", "twice", 4);
    let mut run = TestRun::new("duplicates");
    run.passed_tests = vec![record.clone(), record, passed("Cls", "once", 1)];
    run.failed_tests = vec![failed("Cls", "broken", 2)];

    let stats = RunStatistics::for_run(&run);
    let listed: usize = group_by_class(&run.passed_tests).values().map(Vec::len).sum();
    assert_eq!(stats.passed, listed);
    assert_eq!((stats.passed, stats.failed, stats.total), (2, 1, 3));
    assert_eq!(stats.passed_pct, 66);
}

#[test]
fn statistics_keep_distinct_invocations_with_equal_start() {
    let mut first = passed("Cls", "param", 5);
    first.parameters = vec!["1".into()];
    let mut second = passed("Cls", "param", 5);
    second.parameters = vec!["2".into()];
    let mut run = TestRun::new("data driven");
    run.passed_tests = vec![first, second];
    assert_eq!(RunStatistics::for_run(&run).passed, 2);
}
