//! Command line argument parsing and validation.
//!
//! Point the tool at a graph description and it reports redundant references
//! for every project in it.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Finds package and project references that are already provided transitively
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snitch",
    version,
    about = "Finds package and project references that are already provided transitively",
    long_about = "Analyze a project graph and report direct references that can be removed.

Usage:
  snitch graph.toml
  snitch graph.toml --exclude Serilog --exclude Polly
  snitch graph.toml --project App --strict"
)]
pub struct Args {
    /// Graph description file
    #[arg(index = 1, value_name = "GRAPH", env = "SNITCH_GRAPH")]
    pub graph: PathBuf,

    /// Package names to ignore in the report
    #[arg(
        short,
        long = "exclude",
        value_name = "PACKAGE",
        env = "SNITCH_EXCLUDE",
        value_delimiter = ','
    )]
    pub exclude: Vec<String>,

    /// Project names to skip
    #[arg(
        short,
        long = "skip",
        value_name = "PROJECT",
        env = "SNITCH_SKIP",
        value_delimiter = ','
    )]
    pub skip: Vec<String>,

    /// Analyze only this project
    #[arg(short, long, value_name = "PROJECT", env = "SNITCH_PROJECT")]
    pub project: Option<String>,

    /// Exit with a non-zero code when anything can be removed
    #[arg(long, env = "SNITCH_STRICT")]
    pub strict: bool,

    /// Report pre-release package references (and fail on them in strict mode)
    #[arg(long, env = "SNITCH_NO_PRERELEASE")]
    pub no_prerelease: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "SNITCH_FORMAT")]
    pub format: OutputFormat,
}

/// Report format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored text
    Text,
    /// JSON document on stdout
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.graph.as_os_str().is_empty() {
            return Err("Graph description path is required".to_string());
        }

        if let Some(project) = &self.project
            && self.skip.iter().any(|s| s.eq_ignore_ascii_case(project))
        {
            return Err(format!("Project '{}' is both selected and skipped", project));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    /// Package names excluded from findings
    pub exclude: Vec<String>,
    /// Project names not analyzed
    pub skip: Vec<String>,
    /// Single project to analyze
    pub project: Option<String>,
    /// Non-zero exit code on findings
    pub strict: bool,
    /// Report pre-release references
    pub no_prerelease: bool,
    /// Report format
    pub format: OutputFormat,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            // JSON output must stay machine readable
            output: super::OutputManager::new(args.format == OutputFormat::Json),
            exclude: args.exclude.clone(),
            skip: args.skip.clone(),
            project: args.project.clone(),
            strict: args.strict,
            no_prerelease: args.no_prerelease,
            format: args.format,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether a project is excluded with `--skip`
    pub fn is_skipped(&self, project: &str) -> bool {
        self.skip.iter().any(|s| s.eq_ignore_ascii_case(project))
    }

    /// Package names for result filtering; `None` when nothing is excluded
    pub fn excluded_packages(&self) -> Option<&[String]> {
        if self.exclude.is_empty() {
            None
        } else {
            Some(&self.exclude)
        }
    }
}
