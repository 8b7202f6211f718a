use std::path::Path;

use tracing::{debug, info};

use crate::model::result_model::ReportInput;
use crate::report::assembler::suite_summaries;
use crate::report::chart::SvgPieChart;
use crate::report::console::format_console_summary;
use crate::report::error::ReportError;
use crate::report::generator::ReportGenerator;
use crate::report::html::HtmlRenderer;
use crate::report::json::JsonRenderer;
use crate::report::renderer::Renderer;
use crate::report::report_model::{ReportConfig, ReportSummary};

// ============================================================================
// generate subcommand
// ============================================================================

/// Load results, write the report, and print a console summary.
pub fn cmd_generate(
    input_path: &str,
    output_dir: &str,
    format: &str,
    config: ReportConfig,
) -> Result<ReportSummary, Box<dyn std::error::Error>> {
    let input = load_results(input_path)?;

    if input.suites.is_empty() {
        eprintln!("No suites found in: {}", input_path);
    }

    info!(input = input_path, format, "loaded {} suites", input.suites.len());

    let generator = build_generator(format, config);
    let summary = generator.generate(&input, Path::new(output_dir))?;

    print!("{}", format_console_summary(&suite_summaries(&input.suites)));
    println!(
        "Report written to {}/ ({} pages, {} charts)",
        summary.report_dir.display(),
        summary.pages.len(),
        summary.charts.len()
    );
    if !summary.failed_charts.is_empty() {
        eprintln!("Failed to render {} chart(s)", summary.failed_charts.len());
    }

    Ok(summary)
}

// ============================================================================
// summary subcommand
// ============================================================================

/// Print statistics for the results and return whether nothing failed.
pub fn cmd_summary(input_path: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let input = load_results(input_path)?;
    let summaries = suite_summaries(&input.suites);
    print!("{}", format_console_summary(&summaries));
    Ok(summaries.iter().all(|s| !s.has_failures()))
}

// ============================================================================
// Helpers
// ============================================================================

/// Build a generator for an output format: `json`, or `html` for anything else.
pub fn build_generator(format: &str, config: ReportConfig) -> ReportGenerator {
    let renderer: Box<dyn Renderer> = match format {
        "json" => Box::new(JsonRenderer),
        _ => Box::new(HtmlRenderer::new(
            config.title.clone(),
            config.stylesheet.is_some(),
        )),
    };
    ReportGenerator::new(config, renderer, Box::new(SvgPieChart::default()))
}

/// Load results from a single JSON/YAML file or a directory of them.
///
/// Directory entries are read in file-name order and their suites and log
/// output concatenated, so the report is the same on every run.
pub fn load_results(path: &str) -> Result<ReportInput, ReportError> {
    let path = Path::new(path);
    let metadata = std::fs::metadata(path).map_err(|e| ReportError::io(path, e))?;
    if !metadata.is_dir() {
        return load_results_file(path);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path).map_err(|e| ReportError::io(path, e))? {
        let entry = entry.map_err(|e| ReportError::io(path, e))?;
        let p = entry.path();
        if p.extension().is_some_and(|e| e == "json" || e == "yaml" || e == "yml") {
            files.push(p);
        }
    }
    files.sort();

    let mut input = ReportInput::default();
    for file in &files {
        debug!(file = %file.display(), "loading results");
        input.merge(load_results_file(file)?);
    }
    Ok(input)
}

fn load_results_file(path: &Path) -> Result<ReportInput, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let is_yaml = path
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml");
    if is_yaml {
        serde_yaml::from_str(&content).map_err(|source| ReportError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&content).map_err(|source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
