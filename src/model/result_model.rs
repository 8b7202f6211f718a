use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::ordering::{compare_classes, compare_methods};

// ============================================================================
// Test identity: classes and methods
// ============================================================================

/// A test class, identified by its fully-qualified name.
///
/// Serializes as a bare string so it can key a JSON object directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestClass {
    pub name: String,
}

impl TestClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Ord for TestClass {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_classes(self, other)
    }
}

impl PartialOrd for TestClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A test method. Identity is owning class + method name; description and
/// group labels are carried along but never compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestMethod {
    pub class: TestClass,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Group labels this method declares membership in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

impl TestMethod {
    pub fn new(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            class: TestClass::new(class),
            name: name.into(),
            description: None,
            groups: Vec::new(),
        }
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// `ClassName.method` form used in listings.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class.name, self.name)
    }
}

impl PartialEq for TestMethod {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.name == other.name
    }
}

impl Eq for TestMethod {}

impl Hash for TestMethod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.name.hash(state);
    }
}

impl Ord for TestMethod {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_methods(self, other)
    }
}

impl PartialOrd for TestMethod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Outcomes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Why an invocation failed or was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureDetail {
    /// Exception or error type, if the engine reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack_trace: Vec<String>,
}

/// One recorded result for one invocation of a test method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub method: TestMethod,

    pub status: TestStatus,

    /// Start time or sequence marker; only used for ordering
    #[serde(default)]
    pub start_millis: u64,

    #[serde(default)]
    pub end_millis: u64,

    /// Parameters of a data-driven invocation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureDetail>,

    /// Log lines emitted while the invocation ran
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
}

impl TestOutcome {
    pub fn new(method: TestMethod, status: TestStatus, start_millis: u64) -> Self {
        Self {
            method,
            status,
            start_millis,
            end_millis: start_millis,
            parameters: Vec::new(),
            failure: None,
            output: Vec::new(),
        }
    }

    pub fn class(&self) -> &TestClass {
        &self.method.class
    }

    pub fn duration_millis(&self) -> u64 {
        self.end_millis.saturating_sub(self.start_millis)
    }
}

// ============================================================================
// Runs and suites
// ============================================================================

/// One named test context inside a suite, with its outcome buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub name: String,

    #[serde(default)]
    pub start_millis: u64,

    #[serde(default)]
    pub end_millis: u64,

    #[serde(default)]
    pub passed_tests: Vec<TestOutcome>,

    #[serde(default)]
    pub failed_tests: Vec<TestOutcome>,

    #[serde(default)]
    pub skipped_tests: Vec<TestOutcome>,

    #[serde(default)]
    pub failed_configurations: Vec<TestOutcome>,

    #[serde(default)]
    pub skipped_configurations: Vec<TestOutcome>,

    /// Group label -> member methods, as declared by the engine
    #[serde(default)]
    pub groups: HashMap<String, Vec<TestMethod>>,
}

impl TestRun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn duration_millis(&self) -> u64 {
        self.end_millis.saturating_sub(self.start_millis)
    }

    /// Every outcome in every bucket, test buckets first.
    pub fn all_outcomes(&self) -> impl Iterator<Item = &TestOutcome> {
        self.passed_tests
            .iter()
            .chain(&self.failed_tests)
            .chain(&self.skipped_tests)
            .chain(&self.failed_configurations)
            .chain(&self.skipped_configurations)
    }
}

/// A named collection of test runs produced by one execution pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,

    #[serde(default)]
    pub runs: Vec<TestRun>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: Vec::new(),
        }
    }

    pub fn with_run(mut self, run: TestRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Group membership across all runs of this suite.
    ///
    /// Merges each run's declared mapping with the groups declared on the
    /// methods of its outcomes. Members are not deduplicated here.
    pub fn methods_by_groups(&self) -> HashMap<String, Vec<TestMethod>> {
        let mut groups: HashMap<String, Vec<TestMethod>> = HashMap::new();
        for run in &self.runs {
            for (label, methods) in &run.groups {
                groups
                    .entry(label.clone())
                    .or_default()
                    .extend(methods.iter().cloned());
            }
            for outcome in run.all_outcomes() {
                for label in &outcome.method.groups {
                    groups
                        .entry(label.clone())
                        .or_default()
                        .push(outcome.method.clone());
                }
            }
        }
        groups
    }
}

/// Everything one report is generated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(default)]
    pub suites: Vec<Suite>,

    /// Free-form log output recorded by the test engine
    #[serde(default)]
    pub output: Vec<String>,
}

impl ReportInput {
    pub fn new(suites: Vec<Suite>) -> Self {
        Self {
            suites,
            output: Vec::new(),
        }
    }

    /// Append another input's suites and log output after this one's.
    pub fn merge(&mut self, other: ReportInput) {
        self.suites.extend(other.suites);
        self.output.extend(other.output);
    }
}
