//! Transitive closure analysis for a single root project.
//!
//! The graph is walked depth-first. Every project contributes to its parent the
//! packages (and project references) reachable from it, each tagged with the
//! project where it was first seen. A direct reference of the root that shows up
//! in the closure of its other references is redundant.
//!
//! Contributions are returned by value from each visit and memoized per project,
//! so shared sub-graphs are walked once per analysis.

use crate::analysis::accumulator::{FindingLookup, PackageLookup, ProjectReferenceLookup};
use crate::analysis::findings::{
    PackageToRemove, ProjectPackage, ProjectReferenceToRemove, ProjectReferencedProject,
};
use crate::analysis::result::ProjectAnalyzerResult;
use crate::error::{GraphError, Result};
use crate::graph::ProjectGraph;
use crate::lockfile;
use crate::model::{Project, ProjectId};
use std::collections::HashMap;

/// Finds redundant direct references of projects in a graph
#[derive(Debug, Clone, Copy)]
pub struct ProjectAnalyzer<'g> {
    graph: &'g ProjectGraph,
}

/// Per-analysis traversal state
#[derive(Default)]
struct Traversal {
    stack: Vec<ProjectId>,
    packages: HashMap<ProjectId, Vec<ProjectPackage>>,
    references: HashMap<ProjectId, Vec<ProjectReferencedProject>>,
}

impl<'g> ProjectAnalyzer<'g> {
    /// Create an analyzer over a graph
    pub fn new(graph: &'g ProjectGraph) -> Self {
        Self { graph }
    }

    /// Analyze the project with the given case-insensitive name
    pub fn analyze_named(&self, name: &str) -> Result<ProjectAnalyzerResult> {
        let id = self
            .graph
            .find(name)
            .ok_or_else(|| GraphError::ProjectNotFound {
                name: name.to_string(),
            })?;
        self.analyze(id)
    }

    /// Analyze one root project
    pub fn analyze(&self, root: ProjectId) -> Result<ProjectAnalyzerResult> {
        let project = self.graph.project(root)?;
        log::debug!("Analyzing {}", project.name);

        let mut traversal = Traversal::default();
        let packages = self.redundant_packages(root, project, &mut traversal)?;
        let project_references = self.redundant_project_references(root, project, &mut traversal)?;

        log::debug!(
            "{}: {} package candidates, {} project reference candidates",
            project.name,
            packages.len(),
            project_references.len()
        );

        // Drop candidates the build system manages itself
        let packages = lockfile::prune_candidates(project, packages)?;

        Ok(ProjectAnalyzerResult::new(project, packages, project_references))
    }

    /// Root packages provided by a referenced project. A package the root
    /// declares twice is not reported against the root itself.
    fn redundant_packages(
        &self,
        root: ProjectId,
        project: &Project,
        traversal: &mut Traversal,
    ) -> Result<Vec<PackageToRemove>> {
        traversal.stack.push(root);
        let accumulated = self.inherited_packages(project, traversal)?;
        traversal.stack.pop();

        let mut result: Vec<PackageToRemove> = Vec::new();
        for package in &project.packages {
            let Some(found) = accumulated.find_package(&package.name) else {
                continue;
            };

            if !result.has_finding_for(&found.package.name) {
                log::trace!(
                    "{}: {} is also provided by {}",
                    project.name,
                    package.name,
                    found.project
                );
                result.push(PackageToRemove::new(
                    project.name.clone(),
                    package.clone(),
                    found.clone(),
                ));
            }
        }

        Ok(result)
    }

    /// Packages reachable through the project's references, first-seen provenance wins
    fn inherited_packages(
        &self,
        project: &Project,
        traversal: &mut Traversal,
    ) -> Result<Vec<ProjectPackage>> {
        let mut accumulated: Vec<ProjectPackage> = Vec::new();
        for &child in &project.project_references {
            for item in self.contributed_packages(child, traversal)? {
                if !accumulated.contains_package(&item.package.name) {
                    accumulated.push(item);
                }
            }
        }
        Ok(accumulated)
    }

    /// Packages a project makes visible to the projects referencing it
    fn contributed_packages(
        &self,
        id: ProjectId,
        traversal: &mut Traversal,
    ) -> Result<Vec<ProjectPackage>> {
        if let Some(cached) = traversal.packages.get(&id) {
            return Ok(cached.clone());
        }

        self.enter(id, traversal)?;
        let project = self.graph.project(id)?;
        let mut accumulated = self.inherited_packages(project, traversal)?;

        for package in &project.packages {
            if accumulated.contains_package(&package.name) {
                continue;
            }
            if !package.propagates() {
                log::trace!("{}: {} has private assets", project.name, package.name);
                continue;
            }
            accumulated.push(ProjectPackage::new(project.name.clone(), package.clone()));
        }

        traversal.stack.pop();
        traversal.packages.insert(id, accumulated.clone());
        Ok(accumulated)
    }

    fn redundant_project_references(
        &self,
        root: ProjectId,
        project: &Project,
        traversal: &mut Traversal,
    ) -> Result<Vec<ProjectReferenceToRemove>> {
        if !project.is_sdk_project {
            log::debug!("{}: legacy project, skipping project references", project.name);
            return Ok(Vec::new());
        }

        traversal.stack.push(root);
        let accumulated = self.inherited_references(project, traversal)?;
        traversal.stack.pop();

        let mut result: Vec<ProjectReferenceToRemove> = Vec::new();
        for &reference in &project.project_references {
            let referenced = self.graph.project(reference)?;
            let Some(found) = accumulated.find_reference(&referenced.name) else {
                continue;
            };

            if !result.has_finding_for(&found.referenced_project) {
                result.push(ProjectReferenceToRemove::new(
                    project.name.clone(),
                    referenced.name.clone(),
                    found.clone(),
                ));
            }
        }

        Ok(result)
    }

    fn inherited_references(
        &self,
        project: &Project,
        traversal: &mut Traversal,
    ) -> Result<Vec<ProjectReferencedProject>> {
        let mut accumulated = Vec::new();
        for &child in &project.project_references {
            accumulated.extend(self.contributed_references(child, traversal)?);
        }
        Ok(accumulated)
    }

    /// Every project reference declared at or below `id`; legacy projects contribute nothing
    fn contributed_references(
        &self,
        id: ProjectId,
        traversal: &mut Traversal,
    ) -> Result<Vec<ProjectReferencedProject>> {
        if let Some(cached) = traversal.references.get(&id) {
            return Ok(cached.clone());
        }

        let project = self.graph.project(id)?;
        if !project.is_sdk_project {
            return Ok(Vec::new());
        }

        self.enter(id, traversal)?;
        let mut accumulated = self.inherited_references(project, traversal)?;
        for &reference in &project.project_references {
            let referenced = self.graph.project(reference)?;
            accumulated.push(ProjectReferencedProject::new(
                project.name.clone(),
                referenced.name.clone(),
            ));
        }

        traversal.stack.pop();
        traversal.references.insert(id, accumulated.clone());
        Ok(accumulated)
    }

    /// Push a project on the visit stack, failing if it is already being visited
    fn enter(&self, id: ProjectId, traversal: &mut Traversal) -> Result<()> {
        if let Some(position) = traversal.stack.iter().position(|&visiting| visiting == id) {
            let mut cycle = Vec::with_capacity(traversal.stack.len() - position + 1);
            for &visiting in &traversal.stack[position..] {
                cycle.push(self.graph.project(visiting)?.name.to_string());
            }
            cycle.push(self.graph.project(id)?.name.to_string());
            return Err(GraphError::CyclicReference { cycle }.into());
        }

        traversal.stack.push(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnitchError;
    use crate::model::{Package, PackageVersion};

    fn package(name: &str, version: &str) -> Package {
        Package::new(name, Some(PackageVersion::parse(version).unwrap()))
    }

    #[test]
    fn test_root_package_provided_by_reference_is_found() {
        let mut graph = ProjectGraph::new();
        let a = graph
            .add_project(Project::new("A", "net8.0").with_package(package("X", "1.0.0")))
            .unwrap();
        let root = graph
            .add_project(Project::new("Root", "net8.0").with_package(package("X", "1.0.0")))
            .unwrap();
        graph.add_reference(root, a).unwrap();

        let analyzer = ProjectAnalyzer::new(&graph);
        let result = analyzer.analyze(root).unwrap();
        assert_eq!(result.can_be_removed().len(), 1);
        assert_eq!(result.can_be_removed()[0].original.project.as_str(), "A");

        let leaf = analyzer.analyze(a).unwrap();
        assert!(leaf.nothing_to_remove());
    }

    #[test]
    fn test_packages_deep_in_the_graph_are_found() {
        let mut graph = ProjectGraph::new();
        let core = graph
            .add_project(Project::new("Core", "net8.0").with_package(package("Polly", "8.0.0")))
            .unwrap();
        let data = graph.add_project(Project::new("Data", "net8.0")).unwrap();
        let root = graph
            .add_project(Project::new("Root", "net8.0").with_package(package("polly", "7.0.0")))
            .unwrap();
        graph.add_reference(data, core).unwrap();
        graph.add_reference(root, data).unwrap();

        let result = ProjectAnalyzer::new(&graph).analyze(root).unwrap();
        assert!(result.can_be_removed().is_empty());
        assert_eq!(result.might_be_removed().len(), 1);
        assert_eq!(result.might_be_removed()[0].original.project.as_str(), "Core");
    }

    #[test]
    fn test_package_redeclared_in_middle_keeps_deepest_provenance() {
        let mut graph = ProjectGraph::new();
        let core = graph
            .add_project(Project::new("Core", "net8.0").with_package(package("X", "1.0.0")))
            .unwrap();
        let data = graph
            .add_project(Project::new("Data", "net8.0").with_package(package("X", "2.0.0")))
            .unwrap();
        let root = graph
            .add_project(Project::new("Root", "net8.0").with_package(package("X", "1.0.0")))
            .unwrap();
        graph.add_reference(data, core).unwrap();
        graph.add_reference(root, data).unwrap();

        let result = ProjectAnalyzer::new(&graph).analyze(root).unwrap();
        assert_eq!(result.can_be_removed().len(), 1);
        assert_eq!(result.can_be_removed()[0].original.project.as_str(), "Core");
    }

    #[test]
    fn test_shared_project_reference_is_redundant() {
        let mut graph = ProjectGraph::new();
        let core = graph.add_project(Project::new("Core", "net8.0")).unwrap();
        let data = graph.add_project(Project::new("Data", "net8.0")).unwrap();
        let root = graph.add_project(Project::new("Root", "net8.0")).unwrap();
        graph.add_reference(data, core).unwrap();
        graph.add_reference(root, data).unwrap();
        graph.add_reference(root, core).unwrap();

        let result = ProjectAnalyzer::new(&graph).analyze(root).unwrap();
        let projects = result.can_be_removed_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].referenced_project.as_str(), "Core");
        assert_eq!(projects[0].original.project.as_str(), "Data");
    }

    #[test]
    fn test_legacy_child_hides_its_references() {
        let mut graph = ProjectGraph::new();
        let core = graph.add_project(Project::new("Core", "net472")).unwrap();
        let data = graph.add_project(Project::new("Data", "net472").legacy()).unwrap();
        let root = graph.add_project(Project::new("Root", "net8.0")).unwrap();
        graph.add_reference(data, core).unwrap();
        graph.add_reference(root, data).unwrap();
        graph.add_reference(root, core).unwrap();

        let result = ProjectAnalyzer::new(&graph).analyze(root).unwrap();
        assert!(result.can_be_removed_projects().is_empty());
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut graph = ProjectGraph::new();
        let a = graph.add_project(Project::new("A", "net8.0")).unwrap();
        let b = graph.add_project(Project::new("B", "net8.0")).unwrap();
        graph.add_reference(a, b).unwrap();
        graph.add_reference(b, a).unwrap();

        match ProjectAnalyzer::new(&graph).analyze(a) {
            Err(SnitchError::Graph(GraphError::CyclicReference { cycle })) => {
                assert_eq!(cycle, vec!["A", "B", "A"]);
            }
            other => panic!("expected cycle error, got {:?}", other),
        }
    }

    #[test]
    fn test_analyze_named_unknown_project() {
        let graph = ProjectGraph::new();
        assert!(matches!(
            ProjectAnalyzer::new(&graph).analyze_named("Ghost"),
            Err(SnitchError::Graph(GraphError::ProjectNotFound { .. }))
        ));
    }
}
