//! Classified findings for one analyzed project.

use crate::analysis::findings::{PackageToRemove, ProjectReferenceToRemove};
use crate::model::{Package, Project, ProjectName};

/// Findings for one project, split into removable and possibly removable
#[derive(Debug, Clone)]
pub struct ProjectAnalyzerResult {
    project: ProjectName,
    packages: Vec<PackageToRemove>,
    project_references: Vec<ProjectReferenceToRemove>,
    can_be_removed: Vec<PackageToRemove>,
    might_be_removed: Vec<PackageToRemove>,
    can_be_removed_projects: Vec<ProjectReferenceToRemove>,
    pre_release_packages: Vec<Package>,
}

impl ProjectAnalyzerResult {
    /// Classify the findings of `project`
    pub fn new(
        project: &Project,
        packages: Vec<PackageToRemove>,
        project_references: Vec<ProjectReferenceToRemove>,
    ) -> Self {
        Self::from_parts(
            project.name.clone(),
            packages,
            project_references,
            project.pre_release_packages().cloned().collect(),
        )
    }

    fn from_parts(
        project: ProjectName,
        packages: Vec<PackageToRemove>,
        project_references: Vec<ProjectReferenceToRemove>,
        pre_release_packages: Vec<Package>,
    ) -> Self {
        let (can_be_removed, might_be_removed): (Vec<_>, Vec<_>) = packages
            .iter()
            .cloned()
            .partition(PackageToRemove::can_be_removed);
        let can_be_removed_projects = project_references
            .iter()
            .filter(|reference| reference.can_be_removed())
            .cloned()
            .collect();

        Self {
            project,
            packages,
            project_references,
            can_be_removed,
            might_be_removed,
            can_be_removed_projects,
            pre_release_packages,
        }
    }

    /// Analyzed project
    pub fn project(&self) -> &ProjectName {
        &self.project
    }

    /// Redundant package references whose versions match exactly
    pub fn can_be_removed(&self) -> &[PackageToRemove] {
        &self.can_be_removed
    }

    /// Redundant package references with a different version than the transitive one
    pub fn might_be_removed(&self) -> &[PackageToRemove] {
        &self.might_be_removed
    }

    /// Redundant project references
    pub fn can_be_removed_projects(&self) -> &[ProjectReferenceToRemove] {
        &self.can_be_removed_projects
    }

    /// Direct packages with a pre-release version
    pub fn pre_release_packages(&self) -> &[Package] {
        &self.pre_release_packages
    }

    /// No package findings of either kind
    pub fn no_packages_to_remove(&self) -> bool {
        self.can_be_removed.is_empty() && self.might_be_removed.is_empty()
    }

    /// No findings at all
    pub fn nothing_to_remove(&self) -> bool {
        self.no_packages_to_remove() && self.can_be_removed_projects.is_empty()
    }

    /// At least one direct pre-release package
    pub fn has_pre_releases(&self) -> bool {
        !self.pre_release_packages.is_empty()
    }

    /// Copy of this result without package findings for the given names
    ///
    /// `None` applies no filtering. Names compare case-insensitively.
    pub fn filter<S: AsRef<str>>(&self, excluded: Option<&[S]>) -> Self {
        let Some(excluded) = excluded else {
            return self.clone();
        };

        let packages = self
            .packages
            .iter()
            .filter(|finding| {
                !excluded
                    .iter()
                    .any(|name| finding.package.name.matches(name.as_ref()))
            })
            .cloned()
            .collect();

        Self::from_parts(
            self.project.clone(),
            packages,
            self.project_references.clone(),
            self.pre_release_packages.clone(),
        )
    }
}
