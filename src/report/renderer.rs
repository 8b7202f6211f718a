use std::path::Path;

use crate::report::error::RenderError;
use crate::report::page::PageData;

// ============================================================================
// Renderer trait: page output boundary
// ============================================================================

/// Turns one page context into one artifact at `target`.
///
/// Implementations must be deterministic: the same template name and context
/// always produce the same bytes.
pub trait Renderer {
    fn render(&self, template_name: &str, context: &PageData, target: &Path) -> Result<(), RenderError>;

    /// Static files this renderer's pages reference (stylesheets, scripts).
    fn resources(&self) -> &[StaticResource] {
        &[]
    }
}

/// A file copied verbatim into the report directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticResource {
    pub file_name: &'static str,
    pub contents: &'static str,
}

/// Write `contents` to `target`, mapping failures to [`RenderError::Io`].
pub fn write_artifact(target: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(target, contents).map_err(|e| RenderError::io(target, e))
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
