use serde::{Deserialize, Serialize};

use crate::aggregate::class_grouper::group_by_class;
use crate::model::result_model::{TestOutcome, TestRun};

// ============================================================================
// Pass/fail/skip counts and integer percentage shares
// ============================================================================

/// Counts and truncated percentages for one run or an aggregate of runs.
///
/// Percentages are `floor(100 * count / total)`, so they may sum to as little
/// as 98. A zero total yields 0 for every share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,

    pub passed_pct: u32,
    pub failed_pct: u32,
    pub skipped_pct: u32,
}

impl RunStatistics {
    pub fn from_counts(passed: usize, failed: usize, skipped: usize) -> Self {
        let total = passed + failed + skipped;
        Self {
            passed,
            failed,
            skipped,
            total,
            passed_pct: percentage(passed, total),
            failed_pct: percentage(failed, total),
            skipped_pct: percentage(skipped, total),
        }
    }

    /// Statistics over a run's test buckets. Configuration buckets do not count.
    ///
    /// A record reached more than once in a bucket counts once, matching the
    /// entries listed on the run's results page.
    pub fn for_run(run: &TestRun) -> Self {
        Self::from_counts(
            distinct_count(&run.passed_tests),
            distinct_count(&run.failed_tests),
            distinct_count(&run.skipped_tests),
        )
    }

    /// Sum the counts of several statistics and recompute the shares.
    pub fn combine<I>(stats: I) -> Self
    where
        I: IntoIterator<Item = RunStatistics>,
    {
        let (passed, failed, skipped) = stats
            .into_iter()
            .fold((0, 0, 0), |(p, f, s), st| (p + st.passed, f + st.failed, s + st.skipped));
        Self::from_counts(passed, failed, skipped)
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Number of entries left in a bucket once identical duplicates are dropped.
fn distinct_count(bucket: &[TestOutcome]) -> usize {
    group_by_class(bucket).values().map(Vec::len).sum()
}

/// `floor(100 * count / total)`, or 0 when there is nothing to divide by.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count.saturating_mul(100) / total) as u32
}
