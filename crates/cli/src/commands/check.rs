use anyhow::{bail, Result};
use clap::Parser;
use preflight_core::run_checklist;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::reporter::{report_human, report_json, report_junit, OutputFormat};

const DEFAULT_PROJECT_ROOT: &str = ".";

/// Run the scaffolding checklist against a project root
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Path to the backend project under test
    #[arg(value_name = "PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Port the backend is expected to listen on. Declared for parity with
    /// the backend's own configuration; no check contacts it.
    #[arg(long, env = "TEST_PORT", default_value_t = 5001)]
    pub port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (human, json, junit)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<i32> {
        let output_format = self.output_format()?;
        let project_root = self.project_root();

        debug!(port = self.port, "test port declared but not probed");

        let report = run_checklist(project_root);

        match output_format {
            OutputFormat::Human => report_human(&report, self.verbose),
            OutputFormat::Json => report_json(&report)?,
            OutputFormat::Junit => {
                let mut stdout = std::io::stdout();
                report_junit(&report, &mut stdout)?;
            }
        }

        Ok(report.exit_code())
    }

    fn project_root(&self) -> &Path {
        self.project_root
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_PROJECT_ROOT))
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "junit" => Ok(OutputFormat::Junit),
            other => bail!("Unsupported output format: {other}. Use human, json, or junit."),
        }
    }
}
