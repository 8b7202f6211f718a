use std::collections::BTreeSet;
use std::path::Path;

use crate::aggregate::class_grouper::ClassGroups;
use crate::aggregate::group_aggregator::GroupedMethods;
use crate::aggregate::statistics::RunStatistics;
use crate::model::result_model::{TestMethod, TestOutcome, TestStatus};
use crate::report::error::RenderError;
use crate::report::page::{
    CUSTOM_STYLE_FILE, GROUPS_FILE, INDEX_FILE, OUTPUT_FILE, OVERVIEW_FILE, PageData, RESULTS_FILE,
    SUITES_FILE,
};
use crate::report::renderer::{Renderer, StaticResource, escape_html, write_artifact};
use crate::report::report_model::{RunSummary, SuiteSummary};
use crate::report::resources::HTML_RESOURCES;

// ============================================================================
// HTML renderer: static report pages
// ============================================================================

/// Renders report pages as standalone HTML documents.
///
/// Every page links `reportng.css` and `reportng.js`, plus `custom.css` when
/// a custom stylesheet was configured.
pub struct HtmlRenderer {
    pub title: String,
    pub custom_stylesheet: bool,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>, custom_stylesheet: bool) -> Self {
        Self {
            title: title.into(),
            custom_stylesheet,
        }
    }

    /// Produce the markup for one page, or fail when the template and
    /// context do not belong together.
    pub fn to_html(&self, template_name: &str, context: &PageData) -> Result<String, RenderError> {
        let html = match (template_name, context) {
            (INDEX_FILE, PageData::Frameset {}) => self.frameset(),
            (OVERVIEW_FILE | INDEX_FILE, PageData::Overview { suites, totals }) => {
                self.overview(suites, totals)
            }
            (SUITES_FILE, PageData::SuiteList { suites }) => self.suite_list(suites),
            (GROUPS_FILE, PageData::Groups { suite, groups }) => self.groups(suite, groups),
            (
                RESULTS_FILE,
                PageData::Results {
                    result,
                    failed_configurations,
                    skipped_configurations,
                    failed_tests,
                    skipped_tests,
                    passed_tests,
                },
            ) => self.results(
                result,
                &[
                    ("Failed Configurations", "failed", failed_configurations),
                    ("Skipped Configurations", "skipped", skipped_configurations),
                    ("Failed Tests", "failed", failed_tests),
                    ("Skipped Tests", "skipped", skipped_tests),
                    ("Passed Tests", "passed", passed_tests),
                ],
            ),
            (OUTPUT_FILE, PageData::Output { output }) => self.output(output),
            (template, page) => {
                return Err(RenderError::TemplateMismatch {
                    template: template.to_string(),
                    page: page.describe(),
                });
            }
        };
        Ok(html)
    }

    fn frameset(&self) -> String {
        format!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">
<html>
<head>
<meta charset="UTF-8">
<title>{title}</title>
</head>
<frameset cols="20%,*">
<frame src="{suites}" name="suites">
<frame src="{overview}" name="main">
</frameset>
</html>
"#,
            title = escape_html(&self.title),
            suites = SUITES_FILE,
            overview = OVERVIEW_FILE,
        )
    }

    fn overview(&self, suites: &[SuiteSummary], totals: &RunStatistics) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));

        for suite in suites {
            body.push_str(&format!(
                "<table class=\"overview\">\n<tr><th colspan=\"6\" class=\"{class}\">{name}</th></tr>\n",
                class = status_class(&suite.totals),
                name = escape_html(&suite.name),
            ));
            body.push_str(
                "<tr><th>Test</th><th>Duration</th><th>Passed</th><th>Skipped</th><th>Failed</th><th>Pass Rate</th></tr>\n",
            );
            for run in &suite.runs {
                body.push_str(&stats_row(
                    &format!(
                        "<a href=\"{}\">{}</a>",
                        run.results_slot,
                        escape_html(&run.name)
                    ),
                    run.duration_millis,
                    &run.stats,
                ));
            }
            body.push_str(&stats_row("Total", suite.duration_millis, &suite.totals));
            body.push_str("</table>\n");
        }

        body.push_str(&format!(
            "<p class=\"totals {class}\">All suites: {passed} passed, {skipped} skipped, {failed} failed ({total} total)</p>\n",
            class = status_class(totals),
            passed = totals.passed,
            skipped = totals.skipped,
            failed = totals.failed,
            total = totals.total,
        ));

        self.page("Overview", &body)
    }

    fn suite_list(&self, suites: &[SuiteSummary]) -> String {
        let mut body = String::new();
        body.push_str(&format!(
            "<div id=\"suites\">\n<p><a href=\"{}\" target=\"main\">Overview</a></p>\n",
            OVERVIEW_FILE
        ));
        if suites.is_empty() {
            body.push_str("<p>No suites.</p>\n");
        }
        for suite in suites {
            body.push_str(&format!(
                "<div class=\"suite {class}\">\n<h2>{name}</h2>\n",
                class = status_class(&suite.totals),
                name = escape_html(&suite.name),
            ));
            if let Some(ref slot) = suite.groups_slot {
                body.push_str(&format!(
                    "<p><a href=\"{}\" target=\"main\">Groups</a></p>\n",
                    slot
                ));
            }
            body.push_str("<ul>\n");
            for run in &suite.runs {
                body.push_str(&format!(
                    "<li class=\"{class}\"><a href=\"{slot}\" target=\"main\">{name}</a></li>\n",
                    class = status_class(&run.stats),
                    slot = run.results_slot,
                    name = escape_html(&run.name),
                ));
            }
            body.push_str("</ul>\n</div>\n");
        }
        body.push_str("</div>\n");

        self.page("Suites", &body)
    }

    fn groups(&self, suite: &SuiteSummary, groups: &GroupedMethods) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{} — Groups</h1>\n", escape_html(&suite.name)));
        for (label, methods) in groups {
            body.push_str(&format!(
                "<div class=\"group\">\n<h2>{}</h2>\n{}</div>\n",
                escape_html(label),
                method_list(methods)
            ));
        }
        self.page("Groups", &body)
    }

    fn results(&self, result: &RunSummary, sections: &[(&str, &str, &ClassGroups)]) -> String {
        let mut body = String::new();
        body.push_str(&format!(
            "<h1>{name}</h1>\n<p>{passed} passed ({passed_pct}%), {failed} failed ({failed_pct}%), {skipped} skipped ({skipped_pct}%) in {duration}</p>\n<img class=\"chart\" src=\"{chart}\" alt=\"{name} results chart\">\n",
            name = escape_html(&result.name),
            passed = result.stats.passed,
            passed_pct = result.stats.passed_pct,
            failed = result.stats.failed,
            failed_pct = result.stats.failed_pct,
            skipped = result.stats.skipped,
            skipped_pct = result.stats.skipped_pct,
            duration = format_duration(result.duration_millis),
            chart = result.chart_slot,
        ));

        for (heading, class, groups) in sections {
            if groups.is_empty() {
                continue;
            }
            body.push_str(&format!(
                "<table class=\"results {class}\">\n<tr><th colspan=\"3\" class=\"{class}\">{heading}</th></tr>\n",
                class = class,
                heading = heading,
            ));
            for (test_class, outcomes) in groups.iter() {
                body.push_str(&format!(
                    "<tr><td colspan=\"3\" class=\"group\">{}</td></tr>\n",
                    escape_html(&test_class.name)
                ));
                for outcome in outcomes {
                    body.push_str(&outcome_row(outcome));
                }
            }
            body.push_str("</table>\n");
        }

        self.page(&result.name, &body)
    }

    fn output(&self, lines: &[String]) -> String {
        let mut body = String::from("<h1>Log Output</h1>\n<pre class=\"log\">");
        for line in lines {
            body.push_str(&escape_html(line));
            body.push('\n');
        }
        body.push_str("</pre>\n");
        self.page("Log Output", &body)
    }

    /// Wrap page content in the shared document head.
    fn page(&self, heading: &str, body: &str) -> String {
        let custom = if self.custom_stylesheet {
            format!("<link rel=\"stylesheet\" href=\"{}\">\n", CUSTOM_STYLE_FILE)
        } else {
            String::new()
        };
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title} — {heading}</title>
<link rel="stylesheet" href="reportng.css">
{custom}<script src="reportng.js"></script>
</head>
<body>
{body}</body>
</html>
"#,
            title = escape_html(&self.title),
            heading = escape_html(heading),
            custom = custom,
            body = body,
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, template_name: &str, context: &PageData, target: &Path) -> Result<(), RenderError> {
        let html = self.to_html(template_name, context)?;
        write_artifact(target, &html)
    }

    fn resources(&self) -> &[StaticResource] {
        &HTML_RESOURCES
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn status_class(stats: &RunStatistics) -> &'static str {
    if stats.failed > 0 {
        "failed"
    } else if stats.skipped > 0 {
        "skipped"
    } else {
        "passed"
    }
}

fn stats_row(label: &str, duration_millis: u64, stats: &RunStatistics) -> String {
    format!(
        "<tr class=\"{class}\"><td>{label}</td><td>{duration}</td><td>{passed}</td><td>{skipped}</td><td>{failed}</td><td>{pct}%</td></tr>\n",
        class = status_class(stats),
        label = label,
        duration = format_duration(duration_millis),
        passed = stats.passed,
        skipped = stats.skipped,
        failed = stats.failed,
        pct = stats.passed_pct,
    )
}

fn method_list(methods: &BTreeSet<TestMethod>) -> String {
    let mut out = String::from("<ul>\n");
    for method in methods {
        out.push_str(&format!(
            "<li>{}</li>\n",
            escape_html(&method.qualified_name())
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn outcome_row(outcome: &TestOutcome) -> String {
    let marker = match outcome.status {
        TestStatus::Passed => "\u{2713}",
        TestStatus::Failed => "\u{2717}",
        TestStatus::Skipped => "\u{2013}",
    };

    let mut name = escape_html(&outcome.method.name);
    if !outcome.parameters.is_empty() {
        let params: Vec<String> = outcome.parameters.iter().map(|p| escape_html(p)).collect();
        name.push_str(&format!("({})", params.join(", ")));
    }

    let mut detail = String::new();
    if let Some(ref description) = outcome.method.description {
        detail.push_str(&format!(
            "<div class=\"description\">{}</div>\n",
            escape_html(description)
        ));
    }
    if let Some(ref failure) = outcome.failure {
        let headline = match (&failure.kind, &failure.message) {
            (Some(kind), Some(message)) => format!("{}: {}", kind, message),
            (Some(kind), None) => kind.clone(),
            (None, Some(message)) => message.clone(),
            (None, None) => String::new(),
        };
        if !headline.is_empty() {
            detail.push_str(&format!(
                "<div class=\"failure\">{}</div>\n",
                escape_html(&headline)
            ));
        }
        if !failure.stack_trace.is_empty() {
            let frames: Vec<String> = failure.stack_trace.iter().map(|f| escape_html(f)).collect();
            detail.push_str(&format!(
                "<pre class=\"stacktrace\">{}</pre>\n",
                frames.join("\n")
            ));
        }
    }
    if !outcome.output.is_empty() {
        let lines: Vec<String> = outcome.output.iter().map(|l| escape_html(l)).collect();
        detail.push_str(&format!("<pre class=\"output\">{}</pre>\n", lines.join("\n")));
    }

    format!(
        "<tr><td class=\"method\">{marker} {name}</td><td class=\"duration\">{duration}</td><td>{detail}</td></tr>\n",
        marker = marker,
        name = name,
        duration = format_duration(outcome.duration_millis()),
        detail = detail,
    )
}

/// `1.234s` style duration.
pub fn format_duration(millis: u64) -> String {
    format!("{:.3}s", millis as f64 / 1000.0)
}
