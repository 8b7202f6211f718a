use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::model::result_model::ReportInput;
use crate::report::assembler::ReportAssembler;
use crate::report::chart::ChartRenderer;
use crate::report::error::{RenderError, ReportError};
use crate::report::page::{CUSTOM_STYLE_FILE, REPORT_DIRECTORY};
use crate::report::renderer::Renderer;
use crate::report::report_model::{ReportConfig, ReportSummary};
use crate::report::resources::{copy_stylesheet, remove_empty_directories, write_resources};

/// Drives one report generation: assembles page contexts, hands them to the
/// renderer, renders charts, and writes static resources.
///
/// A page or resource failure aborts the whole generation with
/// [`ReportError::Generation`]. Files already written stay on disk; running
/// the generation again overwrites them. A chart failure is logged and the
/// generation carries on.
pub struct ReportGenerator {
    assembler: ReportAssembler,
    renderer: Box<dyn Renderer>,
    charts: Box<dyn ChartRenderer>,
}

impl ReportGenerator {
    pub fn new(
        config: ReportConfig,
        renderer: Box<dyn Renderer>,
        charts: Box<dyn ChartRenderer>,
    ) -> Self {
        Self {
            assembler: ReportAssembler::new(config),
            renderer,
            charts,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        self.assembler.config()
    }

    /// Generate the report under `<output_dir>/html`.
    pub fn generate(&self, input: &ReportInput, output_dir: &Path) -> Result<ReportSummary, ReportError> {
        remove_empty_directories(output_dir);

        let report_dir = output_dir.join(REPORT_DIRECTORY);
        fs::create_dir_all(&report_dir).map_err(|e| {
            ReportError::generation(REPORT_DIRECTORY, RenderError::io(&report_dir, e))
        })?;

        info!(
            suites = input.suites.len(),
            dir = %report_dir.display(),
            "generating report"
        );

        let mut summary = ReportSummary {
            report_dir: report_dir.clone(),
            ..ReportSummary::default()
        };

        for page in self.assembler.assemble(input) {
            debug!(slot = %page.slot, template = page.template_name(), "rendering page");
            self.renderer
                .render(page.template_name(), &page.data, &report_dir.join(&page.slot))
                .map_err(|e| ReportError::generation(page.slot.clone(), e))?;
            summary.pages.push(page.slot);
        }

        for job in self.assembler.charts(&input.suites) {
            match self.charts.render_chart(&job.chart, &report_dir.join(&job.slot)) {
                Ok(()) => {
                    debug!(slot = %job.slot, "rendered chart");
                    summary.charts.push(job.slot);
                }
                Err(e) => {
                    warn!(slot = %job.slot, error = %e, "failed to render chart, continuing");
                    summary.failed_charts.push(job.slot);
                }
            }
        }

        write_resources(&report_dir, self.renderer.resources())
            .map_err(|e| ReportError::generation("resources", e))?;

        if let Some(ref stylesheet) = self.config().stylesheet {
            copy_stylesheet(&report_dir, stylesheet)
                .map_err(|e| ReportError::generation(CUSTOM_STYLE_FILE, e))?;
        }

        info!(
            pages = summary.pages.len(),
            charts = summary.charts.len(),
            failed_charts = summary.failed_charts.len(),
            "report complete"
        );
        Ok(summary)
    }
}
