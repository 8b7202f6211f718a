use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::report::report_model::{DEFAULT_TITLE, ReportConfig};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "reportng",
    version,
    about = "Static HTML reports for test execution results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: reportng.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a report from a results file or directory of results files
    Generate {
        /// Results file (.json, .yaml, .yml) or directory of them
        #[arg(long)]
        input: String,

        /// Directory the report is written under (pages go to <dir>/html)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Frameset layout (true) or frameless layout (false)
        #[arg(long, action = clap::ArgAction::Set)]
        frames: Option<bool>,

        /// Output format: html, json
        #[arg(long)]
        format: Option<String>,

        /// Stylesheet copied into the report as custom.css
        #[arg(long)]
        stylesheet: Option<String>,

        /// Include the engine's log output page
        #[arg(long, action = clap::ArgAction::Set)]
        output_log: Option<bool>,
    },

    /// Print pass/fail/skip statistics without writing a report
    Summary {
        /// Results file (.json, .yaml, .yml) or directory of them
        #[arg(long)]
        input: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "reportng.yaml";

/// Optional YAML config file: `reportng.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportFileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFileConfig {
    pub title: Option<String>,

    pub frames: Option<bool>,

    pub output_log: Option<bool>,

    pub stylesheet: Option<String>,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ReportFileConfig {
    fn default() -> Self {
        Self {
            title: None,
            frames: None,
            output_log: None,
            stylesheet: None,
            format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

// Serde default helpers
fn default_format() -> String { "html".to_string() }
fn default_output_dir() -> String { "test-output".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build a ReportConfig: CLI value, else config file value, else default.
pub fn build_report_config(
    title: Option<&str>,
    frames: Option<bool>,
    output_log: Option<bool>,
    stylesheet: Option<&str>,
    file: &ReportFileConfig,
) -> ReportConfig {
    ReportConfig {
        title: title
            .or(file.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        frames: frames.or(file.frames).unwrap_or(true),
        output_log: output_log.or(file.output_log).unwrap_or(true),
        stylesheet: stylesheet
            .or(file.stylesheet.as_deref())
            .map(PathBuf::from),
    }
}
