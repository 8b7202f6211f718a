use std::cmp::Ordering;

use crate::model::result_model::{TestClass, TestMethod, TestOutcome};

// ============================================================================
// Total orders used by every sorted report view
// ============================================================================

/// Classes sort alphabetically by fully-qualified name.
pub fn compare_classes(a: &TestClass, b: &TestClass) -> Ordering {
    a.name.cmp(&b.name)
}

/// Methods sort by class name, then method name.
pub fn compare_methods(a: &TestMethod, b: &TestMethod) -> Ordering {
    compare_classes(&a.class, &b.class).then_with(|| a.name.cmp(&b.name))
}

/// Outcomes sort by start time, ties broken by method name.
pub fn compare_outcomes(a: &TestOutcome, b: &TestOutcome) -> Ordering {
    a.start_millis
        .cmp(&b.start_millis)
        .then_with(|| a.method.name.cmp(&b.method.name))
}
