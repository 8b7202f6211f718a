use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by a renderer or chart renderer while writing one artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The renderer has no template for this name/context pair
    #[error("Template '{template}' cannot render a {page} context")]
    TemplateMismatch {
        template: String,
        page: &'static str,
    },
}

impl RenderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Top-level report errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing one artifact failed; the whole report generation is aborted
    #[error("Failed generating HTML report ({slot}): {source}")]
    Generation {
        slot: String,
        #[source]
        source: RenderError,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error ({path}): {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("YAML parse error ({path}): {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ReportError {
    pub fn generation(slot: impl Into<String>, source: RenderError) -> Self {
        ReportError::Generation {
            slot: slot.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
