//! Name lookups over accumulated provenance lists.

use crate::analysis::findings::{
    PackageToRemove, ProjectPackage, ProjectReferenceToRemove, ProjectReferencedProject,
};
use crate::model::{PackageName, ProjectName};

/// Lookups over packages seen in projects
pub trait PackageLookup {
    /// First record for the package name
    fn find_package(&self, name: &PackageName) -> Option<&ProjectPackage>;

    /// Whether the package name was seen
    fn contains_package(&self, name: &PackageName) -> bool {
        self.find_package(name).is_some()
    }
}

impl PackageLookup for [ProjectPackage] {
    fn find_package(&self, name: &PackageName) -> Option<&ProjectPackage> {
        self.iter().find(|item| &item.package.name == name)
    }
}

/// Lookups over projects referenced by other projects
pub trait ProjectReferenceLookup {
    /// First record referencing the project
    fn find_reference(&self, name: &ProjectName) -> Option<&ProjectReferencedProject>;
}

impl ProjectReferenceLookup for [ProjectReferencedProject] {
    fn find_reference(&self, name: &ProjectName) -> Option<&ProjectReferencedProject> {
        self.iter().find(|item| &item.referenced_project == name)
    }
}

/// Whether a finding for a name was already recorded
pub trait FindingLookup<N> {
    /// True when a finding with this name exists
    fn has_finding_for(&self, name: &N) -> bool;
}

impl FindingLookup<PackageName> for [PackageToRemove] {
    fn has_finding_for(&self, name: &PackageName) -> bool {
        self.iter().any(|finding| &finding.package.name == name)
    }
}

impl FindingLookup<ProjectName> for [ProjectReferenceToRemove] {
    fn has_finding_for(&self, name: &ProjectName) -> bool {
        self.iter().any(|finding| &finding.referenced_project == name)
    }
}
