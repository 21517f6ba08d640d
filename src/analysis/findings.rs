//! Provenance records and removal findings.

use crate::analysis::policy::{MismatchReason, compare_versions};
use crate::model::{Package, ProjectName};

/// A package together with the project it was declared in
#[derive(Debug, Clone)]
pub struct ProjectPackage {
    /// Declaring project
    pub project: ProjectName,
    /// Package as declared there
    pub package: Package,
}

impl ProjectPackage {
    /// Create a provenance record
    pub fn new(project: ProjectName, package: Package) -> Self {
        Self { project, package }
    }
}

impl PartialEq for ProjectPackage {
    fn eq(&self, other: &Self) -> bool {
        self.project == other.project && self.package.name == other.package.name
    }
}

impl Eq for ProjectPackage {}

/// A project reference together with the project that declares it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReferencedProject {
    /// Declaring project
    pub project: ProjectName,
    /// Referenced project
    pub referenced_project: ProjectName,
}

impl ProjectReferencedProject {
    /// Create a provenance record
    pub fn new(project: ProjectName, referenced_project: ProjectName) -> Self {
        Self {
            project,
            referenced_project,
        }
    }
}

/// A direct package reference that is also reachable through another reference
#[derive(Debug, Clone)]
pub struct PackageToRemove {
    /// Project declaring the redundant reference
    pub project: ProjectName,
    /// The redundant reference
    pub package: Package,
    /// Where the package is already provided
    pub original: ProjectPackage,
}

impl PackageToRemove {
    /// Create a finding
    pub fn new(project: ProjectName, package: Package, original: ProjectPackage) -> Self {
        Self {
            project,
            package,
            original,
        }
    }

    /// Declared and transitive versions are identical
    pub fn can_be_removed(&self) -> bool {
        self.package.version == self.original.package.version
    }

    /// Declared and transitive versions differ
    pub fn version_mismatch(&self) -> bool {
        !self.can_be_removed()
    }

    /// How the declared version relates to the transitive one; `None` when they match
    pub fn mismatch_reason(&self) -> Option<MismatchReason> {
        if self.can_be_removed() {
            return None;
        }

        let comparison = compare_versions(
            self.package.version.as_ref(),
            self.original.package.version.as_ref(),
        );
        Some(MismatchReason::from(comparison))
    }
}

/// A direct project reference that is also reachable through another reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReferenceToRemove {
    /// Project declaring the redundant reference
    pub project: ProjectName,
    /// The redundant reference
    pub referenced_project: ProjectName,
    /// Where the project is already referenced
    pub original: ProjectReferencedProject,
}

impl ProjectReferenceToRemove {
    /// Create a finding
    pub fn new(
        project: ProjectName,
        referenced_project: ProjectName,
        original: ProjectReferencedProject,
    ) -> Self {
        Self {
            project,
            referenced_project,
            original,
        }
    }

    /// Project references carry no version, so a finding is always removable
    pub fn can_be_removed(&self) -> bool {
        true
    }
}
