use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::{
    model::result_model::ReportInput,
    report::{
        chart::SvgPieChart,
        error::ReportError,
        generator::ReportGenerator,
        html::HtmlRenderer,
        report_model::{ReportConfig, ReportSummary},
    },
};

pub mod aggregate;
pub mod cli;
pub mod model;
pub mod report;

/// Generate an HTML report with SVG charts under `<output_dir>/html`.
pub fn generate_html_report(
    input: &ReportInput,
    output_dir: &Path,
    config: ReportConfig,
) -> Result<ReportSummary, ReportError> {
    let renderer = HtmlRenderer::new(config.title.clone(), config.stylesheet.is_some());
    let generator = ReportGenerator::new(config, Box::new(renderer), Box::new(SvgPieChart::default()));
    generator.generate(input, output_dir)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count:
/// warn, info, debug, then trace.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
