use serde::Serialize;
use serde_json::{Map, Value};

use crate::aggregate::class_grouper::ClassGroups;
use crate::aggregate::group_aggregator::GroupedMethods;
use crate::aggregate::statistics::RunStatistics;
use crate::report::report_model::{RunSummary, SuiteSummary};

// ============================================================================
// Output file names and slot naming
// ============================================================================

pub const REPORT_DIRECTORY: &str = "html";

pub const INDEX_FILE: &str = "index.html";
pub const SUITES_FILE: &str = "suites.html";
pub const OVERVIEW_FILE: &str = "overview.html";
pub const GROUPS_FILE: &str = "groups.html";
pub const RESULTS_FILE: &str = "results.html";
pub const OUTPUT_FILE: &str = "output.html";
pub const CUSTOM_STYLE_FILE: &str = "custom.css";
pub const CHART_FILE: &str = "report.svg";

/// `suite<i>_test<j>_results.html`
pub fn results_slot(suite_index: usize, run_index: usize) -> String {
    format!("suite{}_test{}_{}", suite_index, run_index, RESULTS_FILE)
}

/// `suite<i>_test<j>_report.svg`
pub fn chart_slot(suite_index: usize, run_index: usize) -> String {
    format!("suite{}_test{}_{}", suite_index, run_index, CHART_FILE)
}

/// `suite<i>_groups.html`
pub fn groups_slot(suite_index: usize) -> String {
    format!("suite{}_{}", suite_index, GROUPS_FILE)
}

// ============================================================================
// Page contexts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Frameset,
    Overview,
    SuiteList,
    Groups,
    Results,
    Output,
}

impl PageKind {
    /// Name of the template a renderer uses for this kind of page.
    pub fn template_name(&self) -> &'static str {
        match self {
            PageKind::Frameset => INDEX_FILE,
            PageKind::Overview => OVERVIEW_FILE,
            PageKind::SuiteList => SUITES_FILE,
            PageKind::Groups => GROUPS_FILE,
            PageKind::Results => RESULTS_FILE,
            PageKind::Output => OUTPUT_FILE,
        }
    }
}

/// Data for one page. Field names are the context keys a renderer sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    Frameset {},

    Overview {
        suites: Vec<SuiteSummary>,
        totals: RunStatistics,
    },

    SuiteList {
        suites: Vec<SuiteSummary>,
    },

    Groups {
        suite: SuiteSummary,
        groups: GroupedMethods,
    },

    #[serde(rename_all = "camelCase")]
    Results {
        result: RunSummary,
        failed_configurations: ClassGroups,
        skipped_configurations: ClassGroups,
        failed_tests: ClassGroups,
        skipped_tests: ClassGroups,
        passed_tests: ClassGroups,
    },

    Output {
        output: Vec<String>,
    },
}

impl PageData {
    /// Short name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            PageData::Frameset {} => "frameset",
            PageData::Overview { .. } => "overview",
            PageData::SuiteList { .. } => "suite list",
            PageData::Groups { .. } => "groups",
            PageData::Results { .. } => "results",
            PageData::Output { .. } => "output",
        }
    }
}

/// One page to render: which template, which output slot, which data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContext {
    pub kind: PageKind,

    /// Output file name, unique within a report
    pub slot: String,

    pub data: PageData,
}

impl PageContext {
    pub fn new(kind: PageKind, slot: impl Into<String>, data: PageData) -> Self {
        Self {
            kind,
            slot: slot.into(),
            data,
        }
    }

    pub fn template_name(&self) -> &'static str {
        self.kind.template_name()
    }

    /// The page data as a key -> value context map.
    pub fn to_context_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        context_map(&self.data)
    }
}

pub fn context_map(data: &PageData) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(data)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
