use std::fs;
use std::path::Path;

use tracing::debug;

use crate::report::error::RenderError;
use crate::report::page::CUSTOM_STYLE_FILE;
use crate::report::renderer::{StaticResource, write_artifact};

pub const REPORTNG_CSS: &str = include_str!("../../assets/reportng.css");
pub const REPORTNG_JS: &str = include_str!("../../assets/reportng.js");

/// Files every HTML report needs next to its pages.
pub static HTML_RESOURCES: [StaticResource; 2] = [
    StaticResource {
        file_name: "reportng.css",
        contents: REPORTNG_CSS,
    },
    StaticResource {
        file_name: "reportng.js",
        contents: REPORTNG_JS,
    },
];

/// Write static resources into the report directory.
pub fn write_resources(report_dir: &Path, resources: &[StaticResource]) -> Result<(), RenderError> {
    for resource in resources {
        write_artifact(&report_dir.join(resource.file_name), resource.contents)?;
    }
    Ok(())
}

/// Copy a user stylesheet into the report as `custom.css`.
pub fn copy_stylesheet(report_dir: &Path, stylesheet: &Path) -> Result<(), RenderError> {
    let target = report_dir.join(CUSTOM_STYLE_FILE);
    fs::copy(stylesheet, &target).map_err(|e| RenderError::io(stylesheet, e))?;
    Ok(())
}

/// Recursively delete empty directories below `dir`, leaving `dir` itself.
///
/// Failures are logged and ignored; a directory that cannot be removed is
/// simply left behind.
pub fn remove_empty_directories(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        if !entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        let path = entry.path();
        remove_empty_directories(&path);
        let is_empty = fs::read_dir(&path).is_ok_and(|mut d| d.next().is_none());
        if is_empty {
            match fs::remove_dir(&path) {
                Ok(()) => debug!(path = %path.display(), "removed empty directory"),
                Err(e) => debug!(path = %path.display(), error = %e, "could not remove empty directory"),
            }
        }
    }
}
