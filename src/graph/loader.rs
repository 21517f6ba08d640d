//! Graph description files.
//!
//! A description lists every project once, with its packages and the names of
//! the projects it references:
//!
//! ```toml
//! [[project]]
//! name = "App"
//! target-framework = "net8.0"
//! lock-file = "App/obj/project.assets.json"
//! references = ["Core"]
//!
//! [[project.package]]
//! name = "Serilog"
//! version = "3.1.1"
//!
//! [[project]]
//! name = "Core"
//! target-framework = "net8.0"
//! ```

use super::ProjectGraph;
use crate::error::{GraphError, Result};
use crate::model::{Package, PackageVersion, Project};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct GraphDescription {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ProjectDescription {
    name: String,
    target_framework: String,
    lock_file: Option<PathBuf>,
    #[serde(default = "default_sdk")]
    sdk: bool,
    #[serde(default)]
    references: Vec<String>,
    #[serde(default, rename = "package")]
    packages: Vec<PackageDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PackageDescription {
    name: String,
    version: Option<String>,
    private_assets: Option<String>,
}

fn default_sdk() -> bool {
    true
}

impl ProjectGraph {
    /// Load a graph description; relative lock file paths resolve against its directory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading project graph from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read graph description {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        Self::from_toml_str(&content, base_dir).map_err(|e| match e {
            crate::error::SnitchError::Toml(source) => GraphError::InvalidDescription {
                path: path.to_path_buf(),
                reason: source.to_string(),
            }
            .into(),
            other => other,
        })
    }

    /// Build a graph from description text
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self> {
        let description: GraphDescription = toml::from_str(content)?;
        let mut graph = ProjectGraph::new();

        let mut ids = Vec::with_capacity(description.projects.len());
        for project in &description.projects {
            ids.push(graph.add_project(Self::build_project(project, base_dir)?)?);
        }

        for (project, &id) in description.projects.iter().zip(&ids) {
            for reference in &project.references {
                let target = graph
                    .find(reference)
                    .ok_or_else(|| GraphError::UnknownReference {
                        project: project.name.clone(),
                        reference: reference.clone(),
                    })?;
                graph.add_reference(id, target)?;
            }
        }

        log::debug!("Loaded {} projects", graph.len());
        Ok(graph)
    }

    fn build_project(description: &ProjectDescription, base_dir: &Path) -> Result<Project> {
        let mut project = Project::new(
            description.name.as_str(),
            description.target_framework.as_str(),
        );
        project.is_sdk_project = description.sdk;
        project.lock_file_path = description.lock_file.as_ref().map(|lock_file| {
            if lock_file.is_absolute() {
                lock_file.clone()
            } else {
                base_dir.join(lock_file)
            }
        });

        for package in &description.packages {
            let version = package
                .version
                .as_deref()
                .map(PackageVersion::parse)
                .transpose()?;
            let mut reference = Package::new(package.name.as_str(), version);
            if let Some(flags) = &package.private_assets {
                reference = reference.with_private_assets(flags);
            }
            project.packages.push(reference);
        }

        Ok(project)
    }
}
