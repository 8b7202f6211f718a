use crate::aggregate::statistics::RunStatistics;
use crate::report::html::format_duration;
use crate::report::report_model::SuiteSummary;

// ============================================================================
// Console summary: formatted terminal output
// ============================================================================

/// Format suite summaries for terminal output.
///
/// Produces output like:
/// ```text
/// === Suite 1: Regression ===
/// ✓ Smoke              3 passed (100%), 0 failed (0%), 0 skipped (0%) in 1.200s
/// ✗ Checkout           1 passed (33%), 1 failed (33%), 1 skipped (33%) in 0.450s
///
/// === Results: 4 passed, 1 failed, 1 skipped (6 total) ===
/// ```
pub fn format_console_summary(suites: &[SuiteSummary]) -> String {
    let mut out = String::new();

    for suite in suites {
        out.push_str(&format!("=== Suite {}: {} ===\n", suite.index, suite.name));

        if suite.runs.is_empty() {
            out.push_str("    (no test runs)\n");
        }

        for run in &suite.runs {
            let marker = if run.stats.has_failures() {
                "\u{2717}"
            } else {
                "\u{2713}"
            };
            out.push_str(&format!(
                "{} {:<20} {} in {}\n",
                marker,
                run.name,
                format_counts(&run.stats),
                format_duration(run.duration_millis)
            ));
        }

        out.push('\n');
    }

    let totals = RunStatistics::combine(suites.iter().map(|s| s.totals));
    out.push_str(&format!(
        "=== Results: {} passed, {} failed, {} skipped ({} total) ===\n",
        totals.passed, totals.failed, totals.skipped, totals.total
    ));

    out
}

fn format_counts(stats: &RunStatistics) -> String {
    format!(
        "{} passed ({}%), {} failed ({}%), {} skipped ({}%)",
        stats.passed,
        stats.passed_pct,
        stats.failed,
        stats.failed_pct,
        stats.skipped,
        stats.skipped_pct
    )
}
