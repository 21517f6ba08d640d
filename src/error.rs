//! Error types for snitch operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for snitch operations
pub type Result<T> = std::result::Result<T, SnitchError>;

/// Main error type for all snitch operations
#[derive(Error, Debug)]
pub enum SnitchError {
    /// Project graph errors
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Version parsing errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Lock file errors
    #[error("Lock file error: {0}")]
    LockFile(#[from] LockFileError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O failures with context attached at the call site
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Project graph errors
#[derive(Error, Debug)]
pub enum GraphError {
    /// Project not present in the graph
    #[error("Project '{name}' not found in graph")]
    ProjectNotFound {
        /// Project name or id
        name: String,
    },

    /// Two projects share a name (names are case-insensitive)
    #[error("Project '{name}' is declared more than once")]
    DuplicateProject {
        /// Project name
        name: String,
    },

    /// A project references a name that no project declares
    #[error("Project '{project}' references unknown project '{reference}'")]
    UnknownReference {
        /// Declaring project
        project: String,
        /// Missing reference
        reference: String,
    },

    /// Project references form a cycle
    #[error("Cyclic project reference detected: {}", cycle.join(" → "))]
    CyclicReference {
        /// Project names along the cycle, first name repeated at the end
        cycle: Vec<String>,
    },

    /// Graph description could not be interpreted
    #[error("Invalid graph description {path}: {reason}")]
    InvalidDescription {
        /// Description file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

/// Version parsing errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Invalid version format
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion {
        /// Version string
        version: String,
        /// Reason for the error
        reason: String,
    },

    /// Pre-release or build metadata rejected by semver
    #[error("Failed to parse version '{version}': {source}")]
    ParseFailed {
        /// Version string
        version: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },
}

/// Resolved-dependency record errors
#[derive(Error, Debug)]
pub enum LockFileError {
    /// Lock file could not be read
    #[error("Failed to read lock file {path}: {source}")]
    ReadFailed {
        /// Lock file path
        path: PathBuf,
        /// IO error
        #[source]
        source: std::io::Error,
    },

    /// Lock file is not valid JSON or misses required sections
    #[error("Failed to parse lock file {path}: {source}")]
    ParseFailed {
        /// Lock file path
        path: PathBuf,
        /// JSON error
        #[source]
        source: serde_json::Error,
    },

    /// No lock file target matches the project's target framework
    #[error("Could not determine target framework '{framework}' in lock file")]
    TargetFrameworkNotFound {
        /// Target framework of the analyzed project
        framework: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Report could not be written
    #[error("Failed to write report: {reason}")]
    OutputFailed {
        /// Reason for the error
        reason: String,
    },
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::OutputFailed {
            reason: error.to_string(),
        }
    }
}

impl SnitchError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            SnitchError::Graph(GraphError::CyclicReference { cycle }) => vec![
                format!("Review references between projects: {}", cycle.join(", ")),
                "Remove the reference that closes the cycle".to_string(),
            ],
            SnitchError::Graph(GraphError::UnknownReference { reference, .. }) => vec![
                format!("Declare a [[project]] named '{}'", reference),
                "Check the reference for typos".to_string(),
            ],
            SnitchError::LockFile(LockFileError::TargetFrameworkNotFound { .. }) => vec![
                "Restore the project so its lock file matches the current target framework"
                    .to_string(),
                "Remove the stale lock file path from the graph description".to_string(),
            ],
            SnitchError::LockFile(LockFileError::ReadFailed { path, .. }) => vec![
                format!("Verify that {} exists", path.display()),
                "Run a restore to regenerate the lock file".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
