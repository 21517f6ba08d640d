//! Resolved-dependency records written by package restore.
//!
//! Only the `project.frameworks.<tfm>.dependencies` section of a restore
//! assets file is read. It tells which direct dependencies were added
//! implicitly by the SDK (`autoReferenced`) and which never flow to
//! consumers (`suppressParent: All`).

mod framework;
mod pruner;

pub use framework::{FrameworkIdentifier, TargetFramework};
pub use pruner::{prune, prune_candidates};

use crate::error::{LockFileError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Include flags that together mean `All`
const ALL_INCLUDE_FLAGS: [&str; 7] = [
    "runtime",
    "compile",
    "build",
    "native",
    "contentfiles",
    "analyzers",
    "buildtransitive",
];

/// A restore assets file
#[derive(Debug, Clone, Deserialize)]
pub struct LockFile {
    /// Assets file format version
    #[serde(default)]
    pub version: u32,
    /// Restore input for the project
    #[serde(rename = "project")]
    pub package_spec: PackageSpec,
}

/// Restore input recorded in the lock file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageSpec {
    /// Targets keyed by framework short name
    #[serde(default)]
    pub frameworks: BTreeMap<String, LockFileTarget>,
}

/// Dependencies restored for one target framework
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockFileTarget {
    /// Alias used in the project file
    #[serde(default)]
    pub target_alias: Option<String>,
    /// Direct dependencies keyed by package id
    #[serde(default)]
    pub dependencies: BTreeMap<String, LockFileDependency>,
}

/// One direct dependency as restored
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockFileDependency {
    /// Dependency kind, usually `Package`
    #[serde(default)]
    pub target: Option<String>,
    /// Version range as declared
    #[serde(default)]
    pub version: Option<String>,
    /// Added implicitly by the SDK
    #[serde(default)]
    pub auto_referenced: bool,
    /// Asset flags hidden from consumers, e.g. `All` or `Compile, Build`
    #[serde(default)]
    pub suppress_parent: Option<String>,
}

impl LockFileDependency {
    /// Nothing of this dependency flows to consumers
    pub fn suppresses_all(&self) -> bool {
        let Some(flags) = &self.suppress_parent else {
            return false;
        };

        let flags: Vec<String> = flags
            .split([',', ';'])
            .map(|flag| flag.trim().to_lowercase())
            .filter(|flag| !flag.is_empty())
            .collect();

        flags.iter().any(|flag| flag == "all")
            || ALL_INCLUDE_FLAGS
                .iter()
                .all(|required| flags.iter().any(|flag| flag == required))
    }

    /// The user is not expected to manage this dependency by hand
    pub fn is_implicit(&self) -> bool {
        self.auto_referenced || self.suppresses_all()
    }
}

impl LockFile {
    /// Read and parse a lock file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading lock file {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| LockFileError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| {
            LockFileError::ParseFailed {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Target for a framework: exact short name first, then the first target of the same family
    pub fn target(&self, framework: &str) -> Result<&LockFileTarget> {
        let wanted = TargetFramework::parse(framework);
        let frameworks = &self.package_spec.frameworks;

        if let Some((_, target)) = frameworks
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted.short_name()))
        {
            return Ok(target);
        }

        let (name, target) = frameworks
            .iter()
            .find(|(name, _)| TargetFramework::parse(name).same_family(&wanted))
            .ok_or_else(|| LockFileError::TargetFrameworkNotFound {
                framework: framework.to_string(),
            })?;

        log::debug!(
            "No {} target in lock file, using {} ({})",
            wanted,
            name,
            wanted.identifier()
        );
        Ok(target)
    }
}

impl LockFileTarget {
    /// Dependency by case-insensitive package id
    pub fn dependency(&self, name: &str) -> Option<&LockFileDependency> {
        self.dependencies
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(name))
            .map(|(_, dependency)| dependency)
    }
}
