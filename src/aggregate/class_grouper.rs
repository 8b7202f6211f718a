use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::ordering::compare_outcomes;
use crate::model::result_model::{TestClass, TestOutcome};

/// Outcomes keyed by owning class. Keys iterate alphabetically.
pub type ClassGroups = BTreeMap<TestClass, Vec<TestOutcome>>;

/// Group outcomes by test class.
///
/// Each class's list is kept sorted as it is built: every outcome is placed
/// at its binary-search position under [`compare_outcomes`]. Identical
/// duplicates (the same record reached twice) are dropped.
pub fn group_by_class<'a, I>(outcomes: I) -> ClassGroups
where
    I: IntoIterator<Item = &'a TestOutcome>,
{
    let mut grouped = ClassGroups::new();
    for outcome in outcomes {
        let for_class = grouped.entry(outcome.class().clone()).or_default();
        insert_sorted(for_class, outcome, compare_outcomes);
    }
    grouped
}

/// Insert a clone of `item` into the sorted `items` at its ordered position.
///
/// When `item` ties with existing entries it goes after the whole tied run,
/// so ties keep arrival order. Nothing is inserted when an equal (`==`)
/// entry already sits in the tied run.
pub fn insert_sorted<T, F>(items: &mut Vec<T>, item: &T, compare: F)
where
    T: Clone + PartialEq,
    F: Fn(&T, &T) -> Ordering,
{
    let index = match items.binary_search_by(|probe| compare(probe, item)) {
        Err(insertion_point) => insertion_point,
        Ok(found) => {
            let start = items[..found].partition_point(|p| compare(p, item) == Ordering::Less);
            let end = found + items[found..].partition_point(|p| compare(p, item) != Ordering::Greater);
            if items[start..end].contains(item) {
                return;
            }
            end
        }
    };
    items.insert(index, item.clone());
}
