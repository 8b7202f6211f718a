use tracing::debug;

use crate::aggregate::class_grouper::group_by_class;
use crate::aggregate::group_aggregator::{GroupedMethods, group_by_label};
use crate::aggregate::statistics::RunStatistics;
use crate::model::result_model::{ReportInput, Suite, TestRun};
use crate::report::chart::{ChartData, ChartJob};
use crate::report::page::{
    INDEX_FILE, OUTPUT_FILE, OVERVIEW_FILE, PageContext, PageData, PageKind, SUITES_FILE,
    groups_slot,
};
use crate::report::report_model::{ReportConfig, RunSummary, SuiteSummary};

/// Builds every page context and chart dataset of a report from the result
/// model. Pure: nothing here touches the filesystem.
///
/// Suites and runs are visited in the order given, never re-sorted, and the
/// 1-based positions name the output slots, so identical input always
/// produces identical slots.
pub struct ReportAssembler {
    config: ReportConfig,
}

impl ReportAssembler {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// All pages of a report, in render order: frameset (frames only),
    /// overview, suite navigation, groups pages, results pages, log output.
    pub fn assemble(&self, input: &ReportInput) -> Vec<PageContext> {
        let groups: Vec<GroupedMethods> = input.suites.iter().map(suite_groups).collect();
        let summaries = summarize(&input.suites, &groups);

        let mut pages = Vec::new();

        let overview_slot = if self.config.frames {
            pages.push(PageContext::new(PageKind::Frameset, INDEX_FILE, PageData::Frameset {}));
            OVERVIEW_FILE
        } else {
            INDEX_FILE
        };
        pages.push(PageContext::new(
            PageKind::Overview,
            overview_slot,
            PageData::Overview {
                suites: summaries.clone(),
                totals: RunStatistics::combine(summaries.iter().map(|s| s.totals)),
            },
        ));

        pages.push(PageContext::new(
            PageKind::SuiteList,
            SUITES_FILE,
            PageData::SuiteList {
                suites: summaries.clone(),
            },
        ));

        for (summary, grouped) in summaries.iter().zip(groups) {
            let Some(slot) = summary.groups_slot.clone() else {
                debug!(suite = %summary.name, "no groups declared, skipping groups page");
                continue;
            };
            pages.push(PageContext::new(
                PageKind::Groups,
                slot,
                PageData::Groups {
                    suite: summary.clone(),
                    groups: grouped,
                },
            ));
        }

        for (suite, summary) in input.suites.iter().zip(&summaries) {
            for (run, run_summary) in suite.runs.iter().zip(&summary.runs) {
                pages.push(results_page(run, run_summary));
            }
        }

        if self.config.output_log && !input.output.is_empty() {
            pages.push(PageContext::new(
                PageKind::Output,
                OUTPUT_FILE,
                PageData::Output {
                    output: input.output.clone(),
                },
            ));
        }

        pages
    }

    /// One pie chart per test run, titled with the run name.
    pub fn charts(&self, suites: &[Suite]) -> Vec<ChartJob> {
        let mut jobs = Vec::new();
        for (i, suite) in suites.iter().enumerate() {
            for (j, run) in suite.runs.iter().enumerate() {
                let summary = RunSummary::new(i + 1, j + 1, run);
                jobs.push(ChartJob {
                    slot: summary.chart_slot,
                    chart: ChartData::for_statistics(&run.name, &summary.stats),
                });
            }
        }
        jobs
    }
}

/// Suite summaries for a set of suites, computing their group views.
pub fn suite_summaries(suites: &[Suite]) -> Vec<SuiteSummary> {
    let groups: Vec<GroupedMethods> = suites.iter().map(suite_groups).collect();
    summarize(suites, &groups)
}

/// Suite summaries with 1-based indices; a suite gets a groups slot only
/// when its aggregated groups are non-empty.
pub fn summarize(suites: &[Suite], groups: &[GroupedMethods]) -> Vec<SuiteSummary> {
    suites
        .iter()
        .enumerate()
        .map(|(i, suite)| {
            let has_groups = groups.get(i).is_some_and(|g| !g.is_empty());
            let slot = has_groups.then(|| groups_slot(i + 1));
            SuiteSummary::new(i + 1, suite, slot)
        })
        .collect()
}

/// The suite's group view: labels and members sorted, duplicates collapsed.
pub fn suite_groups(suite: &Suite) -> GroupedMethods {
    group_by_label(suite.methods_by_groups())
}

/// Class-grouped views of every outcome bucket of one run.
pub fn results_page(run: &TestRun, summary: &RunSummary) -> PageContext {
    PageContext::new(
        PageKind::Results,
        summary.results_slot.clone(),
        PageData::Results {
            result: summary.clone(),
            failed_configurations: group_by_class(&run.failed_configurations),
            skipped_configurations: group_by_class(&run.skipped_configurations),
            failed_tests: group_by_class(&run.failed_tests),
            skipped_tests: group_by_class(&run.skipped_tests),
            passed_tests: group_by_class(&run.passed_tests),
        },
    )
}
