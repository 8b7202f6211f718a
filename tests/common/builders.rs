use reportng::model::result_model::{
    FailureDetail, ReportInput, Suite, TestMethod, TestOutcome, TestRun, TestStatus,
};

// ============================================================================
// Helper builders
// ============================================================================

pub fn method(class: &str, name: &str) -> TestMethod {
    TestMethod::new(class, name)
}

pub fn outcome(class: &str, name: &str, status: TestStatus, start: u64) -> TestOutcome {
    let mut outcome = TestOutcome::new(method(class, name), status, start);
    outcome.end_millis = start + 10;
    outcome
}

pub fn passed(class: &str, name: &str, start: u64) -> TestOutcome {
    outcome(class, name, TestStatus::Passed, start)
}

pub fn failed(class: &str, name: &str, start: u64) -> TestOutcome {
    let mut outcome = outcome(class, name, TestStatus::Failed, start);
    outcome.failure = Some(FailureDetail {
        kind: Some("AssertionError".into()),
        message: Some(format!("{} failed", name)),
        stack_trace: vec![format!("at {}.{}", class, name)],
    });
    outcome
}

pub fn skipped(class: &str, name: &str, start: u64) -> TestOutcome {
    outcome(class, name, TestStatus::Skipped, start)
}

/// One run: ClassA.method1 passed, ClassB.method2 failed, ClassA.method3
/// skipped, with group "smoke" = [ClassA.method1, ClassB.method2].
pub fn scenario_run() -> TestRun {
    let mut run = TestRun::new("Scenario");
    run.start_millis = 1_000;
    run.end_millis = 1_250;
    run.passed_tests = vec![passed("ClassA", "method1", 1)];
    run.failed_tests = vec![failed("ClassB", "method2", 2)];
    run.skipped_tests = vec![skipped("ClassA", "method3", 3)];
    run.groups.insert(
        "smoke".to_string(),
        vec![method("ClassB", "method2"), method("ClassA", "method1")],
    );
    run
}

pub fn scenario_input() -> ReportInput {
    ReportInput::new(vec![Suite::new("Scenario Suite").with_run(scenario_run())])
}

/// Two suites: the first with two runs and groups, the second with one run
/// and no groups. Also carries engine log output.
pub fn multi_suite_input() -> ReportInput {
    let mut checkout = TestRun::new("Checkout");
    checkout.passed_tests = vec![
        passed("com.shop.CartTest", "addItem", 20),
        passed("com.shop.CartTest", "removeItem", 10),
    ];
    checkout.failed_configurations = vec![failed("com.shop.CartTest", "setUp", 5)];

    let mut input = ReportInput::new(vec![
        Suite::new("Regression")
            .with_run(scenario_run())
            .with_run(checkout),
        Suite::new("Nightly").with_run({
            let mut run = TestRun::new("Empty");
            run.skipped_configurations = vec![skipped("com.shop.DbTest", "connect", 1)];
            run
        }),
    ]);
    input.output = vec!["starting".to_string(), "done <ok>".to_string()];
    input
}
