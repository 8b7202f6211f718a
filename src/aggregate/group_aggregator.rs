use std::collections::{BTreeMap, BTreeSet};

use crate::model::result_model::TestMethod;

/// Group label -> member methods, both levels alphabetical.
pub type GroupedMethods = BTreeMap<String, BTreeSet<TestMethod>>;

/// Sort groups alphabetically and the methods inside each group by class
/// name then method name, collapsing duplicate memberships.
///
/// A label seen more than once has its members merged. Labels left with no
/// members are not emitted.
pub fn group_by_label<I, L, M>(methods_by_label: I) -> GroupedMethods
where
    I: IntoIterator<Item = (L, M)>,
    L: Into<String>,
    M: IntoIterator<Item = TestMethod>,
{
    let mut grouped = GroupedMethods::new();
    for (label, methods) in methods_by_label {
        let methods: BTreeSet<TestMethod> = methods.into_iter().collect();
        if methods.is_empty() {
            continue;
        }
        grouped.entry(label.into()).or_default().extend(methods);
    }
    grouped
}
