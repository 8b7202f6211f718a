use std::path::PathBuf;

use serde::Serialize;

use crate::aggregate::statistics::RunStatistics;
use crate::model::result_model::{Suite, TestRun};
use crate::report::page::{chart_slot, results_slot};

// ============================================================================
// Report configuration
// ============================================================================

pub const DEFAULT_TITLE: &str = "Test Results Report";

/// Settings the assembler and generator are constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Heading shown on every page
    pub title: String,

    /// Frameset layout (`index.html` + `overview.html`) or a frameless
    /// layout where the overview is the index
    pub frames: bool,

    /// Emit `output.html` when the engine recorded log output
    pub output_log: bool,

    /// Extra stylesheet copied into the report as `custom.css`
    pub stylesheet: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            frames: true,
            output_log: true,
            stylesheet: None,
        }
    }
}

// ============================================================================
// Per-run and per-suite summaries (overview + navigation data)
// ============================================================================

/// Statistics and output slots for one test run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// 1-based position of the owning suite
    pub suite_index: usize,

    /// 1-based position of the run within its suite
    pub run_index: usize,

    pub name: String,

    pub stats: RunStatistics,

    pub duration_millis: u64,

    pub results_slot: String,

    pub chart_slot: String,
}

impl RunSummary {
    pub fn new(suite_index: usize, run_index: usize, run: &TestRun) -> Self {
        Self {
            suite_index,
            run_index,
            name: run.name.clone(),
            stats: RunStatistics::for_run(run),
            duration_millis: run.duration_millis(),
            results_slot: results_slot(suite_index, run_index),
            chart_slot: chart_slot(suite_index, run_index),
        }
    }
}

/// One suite with its runs and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteSummary {
    pub index: usize,

    pub name: String,

    pub runs: Vec<RunSummary>,

    pub totals: RunStatistics,

    pub duration_millis: u64,

    /// Slot of the suite's groups page, absent when it declares no groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_slot: Option<String>,
}

impl SuiteSummary {
    pub fn new(index: usize, suite: &Suite, groups_slot: Option<String>) -> Self {
        let runs: Vec<RunSummary> = suite
            .runs
            .iter()
            .enumerate()
            .map(|(i, run)| RunSummary::new(index, i + 1, run))
            .collect();
        let totals = RunStatistics::combine(runs.iter().map(|r| r.stats));
        let duration_millis = runs.iter().map(|r| r.duration_millis).sum();
        Self {
            index,
            name: suite.name.clone(),
            runs,
            totals,
            duration_millis,
            groups_slot,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.totals.has_failures()
    }
}

// ============================================================================
// Generation outcome
// ============================================================================

/// What one report generation wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    /// Directory the report was written into
    pub report_dir: PathBuf,

    /// Page slots in the order they were rendered
    pub pages: Vec<String>,

    pub charts: Vec<String>,

    /// Chart slots whose rendering failed (logged, not fatal)
    pub failed_charts: Vec<String>,
}
