//! Project nodes of the dependency graph.

use crate::model::{Package, ProjectName};
use std::fmt;
use std::path::PathBuf;

/// Index of a project inside its [`ProjectGraph`](crate::graph::ProjectGraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub(crate) usize);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A project and its direct references
#[derive(Debug, Clone)]
pub struct Project {
    /// Project name, unique within the graph
    pub name: ProjectName,
    /// Target framework short name, e.g. `net8.0`
    pub target_framework: String,
    /// Resolved-dependency record written by the last restore
    pub lock_file_path: Option<PathBuf>,
    /// SDK-style project; legacy projects skip project-reference analysis
    pub is_sdk_project: bool,
    /// Direct package references in declaration order
    pub packages: Vec<Package>,
    /// Direct project references in declaration order
    pub project_references: Vec<ProjectId>,
}

impl Project {
    /// Create an SDK-style project with no references
    pub fn new(name: impl Into<ProjectName>, target_framework: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_framework: target_framework.into(),
            lock_file_path: None,
            is_sdk_project: true,
            packages: Vec::new(),
            project_references: Vec::new(),
        }
    }

    /// Add a direct package reference
    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    /// Set the lock file path
    pub fn with_lock_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lock_file_path = Some(path.into());
        self
    }

    /// Mark the project as legacy (non-SDK) format
    pub fn legacy(mut self) -> Self {
        self.is_sdk_project = false;
        self
    }

    /// Direct packages that carry a pre-release version
    pub fn pre_release_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|p| p.is_prerelease())
    }
}
