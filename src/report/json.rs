use std::path::Path;

use serde_json::{Value, json};

use crate::report::error::RenderError;
use crate::report::page::{PageData, context_map};
use crate::report::renderer::{Renderer, write_artifact};

// ============================================================================
// JSON renderer: machine-readable, diffable page contexts
// ============================================================================

/// Writes each page context as pretty-printed JSON next to where the HTML
/// page would go, with a `.json` extension.
///
/// ```json
/// {
///   "template": "results.html",
///   "context": { "result": { ... }, "failedTests": { "com.example.LoginTest": [ ... ] } }
/// }
/// ```
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn to_json(&self, template_name: &str, context: &PageData) -> Result<String, RenderError> {
        let document = json!({
            "template": template_name,
            "context": Value::Object(context_map(context)?),
        });
        let mut text = serde_json::to_string_pretty(&document)?;
        text.push('\n');
        Ok(text)
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, template_name: &str, context: &PageData, target: &Path) -> Result<(), RenderError> {
        let text = self.to_json(template_name, context)?;
        write_artifact(&target.with_extension("json"), &text)
    }
}
