//! # Snitch
//!
//! Finds direct references in a project graph that are already satisfied
//! transitively and can be removed from the project file.
//!
//! The analysis is given a fully loaded [`ProjectGraph`]. For a root project it
//! reports:
//!
//! - **Removable packages**: a direct package reference also provided, with the
//!   same version, through a referenced project
//! - **Possibly removable packages**: the same, but with a different version
//! - **Removable project references**: a referenced project that is also
//!   reachable through another project reference
//! - **Pre-release packages** among the direct references
//!
//! When the project has a restore lock file, findings the SDK manages itself
//! (auto-referenced or fully private dependencies) are dropped.
//!
//! ## Usage
//!
//! ```bash
//! snitch graph.toml                    # Analyze every project
//! snitch graph.toml -p App --strict    # Fail if App has redundant references
//! snitch graph.toml --format json      # Machine-readable report
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod analysis;
pub mod cli;
pub mod error;
pub mod graph;
pub mod lockfile;
pub mod model;

// Re-export main types for public API
pub use analysis::{
    MismatchReason, PackageToRemove, ProjectAnalyzer, ProjectAnalyzerResult,
    ProjectReferenceToRemove,
};
pub use cli::Args;
pub use error::{GraphError, LockFileError, Result, SnitchError};
pub use graph::ProjectGraph;
pub use lockfile::LockFile;
pub use model::{Package, PackageVersion, Project, ProjectId};
