use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::aggregate::statistics::RunStatistics;
use crate::report::error::RenderError;
use crate::report::renderer::{escape_html, write_artifact};

// ============================================================================
// Chart datasets
// ============================================================================

/// Segment colors, assigned by dataset key index modulo the palette length:
/// green for passed, red for failed, blue for skipped.
pub const PALETTE: [&str; 3] = ["#00ff00", "#ff0000", "#0000ff"];

pub fn segment_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSegment {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

/// A titled pie dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub segments: Vec<ChartSegment>,
}

impl ChartData {
    /// Passed, Failed, Skipped segments labelled with their percentage share.
    pub fn for_statistics(title: &str, stats: &RunStatistics) -> Self {
        let entries = [
            ("Passed", stats.passed, stats.passed_pct),
            ("Failed", stats.failed, stats.failed_pct),
            ("Skipped", stats.skipped, stats.skipped_pct),
        ];
        let segments = entries
            .iter()
            .enumerate()
            .map(|(i, (kind, count, pct))| ChartSegment {
                label: format!("{} ({}%)", kind, pct),
                count: *count,
                color: segment_color(i),
            })
            .collect();
        Self {
            title: title.to_string(),
            segments,
        }
    }

    pub fn total(&self) -> usize {
        self.segments.iter().map(|s| s.count).sum()
    }
}

/// A chart to render into a report slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJob {
    pub slot: String,
    pub chart: ChartData,
}

// ============================================================================
// ChartRenderer trait: image output boundary
// ============================================================================

pub trait ChartRenderer {
    fn render_chart(&self, chart: &ChartData, target: &Path) -> Result<(), RenderError>;
}

// ============================================================================
// SvgPieChart: dependency-free SVG output
// ============================================================================

/// Renders a pie chart with a legend as a standalone SVG document.
pub struct SvgPieChart {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgPieChart {
    fn default() -> Self {
        Self {
            width: 400,
            height: 220,
        }
    }
}

impl SvgPieChart {
    pub fn to_svg(&self, chart: &ChartData) -> String {
        let radius = (f64::from(self.height) - 60.0) / 2.0;
        let cx = radius + 20.0;
        let cy = f64::from(self.height) / 2.0 + 10.0;
        let total = chart.total();

        let mut slices = String::new();
        if total == 0 {
            let _ = writeln!(
                slices,
                r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="#cccccc" />"##,
                cx, cy, radius
            );
        } else {
            let mut angle = -PI / 2.0;
            for segment in chart.segments.iter().filter(|s| s.count > 0) {
                if segment.count == total {
                    let _ = writeln!(
                        slices,
                        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" />"#,
                        cx, cy, radius, segment.color
                    );
                    break;
                }
                let sweep = 2.0 * PI * segment.count as f64 / total as f64;
                let (x1, y1) = (cx + radius * angle.cos(), cy + radius * angle.sin());
                angle += sweep;
                let (x2, y2) = (cx + radius * angle.cos(), cy + radius * angle.sin());
                let large_arc = if sweep > PI { 1 } else { 0 };
                let _ = writeln!(
                    slices,
                    r#"<path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{color}" />"#,
                    r = radius,
                    color = segment.color,
                );
            }
        }

        let legend_x = cx + radius + 30.0;
        let mut legend = String::new();
        for (i, segment) in chart.segments.iter().enumerate() {
            let y = 50.0 + 24.0 * i as f64;
            let _ = writeln!(
                legend,
                r#"<rect x="{:.2}" y="{:.2}" width="12" height="12" fill="{}" /><text x="{:.2}" y="{:.2}">{}</text>"#,
                legend_x,
                y,
                segment.color,
                legend_x + 18.0,
                y + 11.0,
                escape_html(&segment.label)
            );
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="12">
<text x="{title_x}" y="20" text-anchor="middle" font-size="14" font-weight="bold">{title}</text>
{slices}{legend}</svg>
"#,
            width = self.width,
            height = self.height,
            title_x = self.width / 2,
            title = escape_html(&chart.title),
            slices = slices,
            legend = legend,
        )
    }
}

impl ChartRenderer for SvgPieChart {
    fn render_chart(&self, chart: &ChartData, target: &Path) -> Result<(), RenderError> {
        write_artifact(target, &self.to_svg(chart))
    }
}
