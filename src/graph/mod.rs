//! Project graph storage, ordering and loading.
//!
//! Projects live in an arena and reference each other by [`ProjectId`], so a
//! referenced project can be shared by several parents. Reference cycles can be
//! represented and are reported as [`GraphError::CyclicReference`].

mod loader;

use crate::error::{GraphError, Result};
use crate::model::{Project, ProjectId, ProjectName};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Arena of projects and their references
#[derive(Debug, Clone, Default)]
pub struct ProjectGraph {
    projects: Vec<Project>,
    index: HashMap<ProjectName, ProjectId>,
}

impl ProjectGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project; its `project_references` must point at projects already added
    pub fn add_project(&mut self, project: Project) -> Result<ProjectId> {
        if self.index.contains_key(&project.name) {
            return Err(GraphError::DuplicateProject {
                name: project.name.to_string(),
            }
            .into());
        }

        if let Some(missing) = project
            .project_references
            .iter()
            .find(|id| id.0 >= self.projects.len())
        {
            return Err(GraphError::UnknownReference {
                project: project.name.to_string(),
                reference: missing.to_string(),
            }
            .into());
        }

        let id = ProjectId(self.projects.len());
        self.index.insert(project.name.clone(), id);
        self.projects.push(project);
        Ok(id)
    }

    /// Append a direct project reference from `from` to `to`
    pub fn add_reference(&mut self, from: ProjectId, to: ProjectId) -> Result<()> {
        self.project(to)?;
        let project = self
            .projects
            .get_mut(from.0)
            .ok_or_else(|| GraphError::ProjectNotFound {
                name: from.to_string(),
            })?;
        project.project_references.push(to);
        Ok(())
    }

    /// Look up a project by id
    pub fn project(&self, id: ProjectId) -> Result<&Project> {
        self.projects.get(id.0).ok_or_else(|| {
            GraphError::ProjectNotFound {
                name: id.to_string(),
            }
            .into()
        })
    }

    /// Find a project id by case-insensitive name
    pub fn find(&self, name: &str) -> Option<ProjectId> {
        self.index.get(&ProjectName::new(name)).copied()
    }

    /// All projects in insertion order
    pub fn projects(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(index, project)| (ProjectId(index), project))
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the graph has no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects ordered so that every project comes after the projects it references
    pub fn dependency_order(&self) -> Result<Vec<ProjectId>> {
        let mut graph = DiGraph::<ProjectId, ()>::with_capacity(self.len(), 0);
        let nodes: Vec<NodeIndex> = self.projects().map(|(id, _)| graph.add_node(id)).collect();

        for (id, project) in self.projects() {
            for reference in &project.project_references {
                // Edge from dependency to dependent
                graph.add_edge(nodes[reference.0], nodes[id.0], ());
            }
        }

        match toposort(&graph, None) {
            Ok(sorted) => Ok(sorted.into_iter().map(|node| graph[node]).collect()),
            Err(cycle) => {
                let start = graph[cycle.node_id()];
                let names = self
                    .find_cycle_from(start)
                    .unwrap_or_else(|| vec![self.projects[start.0].name.clone()]);
                Err(GraphError::CyclicReference {
                    cycle: names.iter().map(ToString::to_string).collect(),
                }
                .into())
            }
        }
    }

    /// First reference cycle reachable from `start`, with the closing project repeated
    pub fn find_cycle_from(&self, start: ProjectId) -> Option<Vec<ProjectName>> {
        let mut visited = vec![false; self.len()];
        let mut stack = Vec::new();
        self.dfs_cycle(start, &mut visited, &mut stack)
    }

    fn dfs_cycle(
        &self,
        node: ProjectId,
        visited: &mut [bool],
        stack: &mut Vec<ProjectId>,
    ) -> Option<Vec<ProjectName>> {
        visited[node.0] = true;
        stack.push(node);

        for &next in &self.projects[node.0].project_references {
            if let Some(position) = stack.iter().position(|&n| n == next) {
                let mut cycle: Vec<ProjectName> = stack[position..]
                    .iter()
                    .map(|id| self.projects[id.0].name.clone())
                    .collect();
                cycle.push(self.projects[next.0].name.clone());
                return Some(cycle);
            }
            if !visited[next.0]
                && let Some(cycle) = self.dfs_cycle(next, visited, stack)
            {
                return Some(cycle);
            }
        }

        stack.pop();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnitchError;

    fn chain() -> (ProjectGraph, ProjectId, ProjectId, ProjectId) {
        let mut graph = ProjectGraph::new();
        let core = graph.add_project(Project::new("Core", "net8.0")).unwrap();
        let data = graph.add_project(Project::new("Data", "net8.0")).unwrap();
        let app = graph.add_project(Project::new("App", "net8.0")).unwrap();
        graph.add_reference(app, data).unwrap();
        graph.add_reference(data, core).unwrap();
        (graph, core, data, app)
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut graph = ProjectGraph::new();
        graph.add_project(Project::new("Core", "net8.0")).unwrap();
        let result = graph.add_project(Project::new("core", "net8.0"));
        assert!(matches!(
            result,
            Err(SnitchError::Graph(GraphError::DuplicateProject { .. }))
        ));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let (graph, core, _, _) = chain();
        assert_eq!(graph.find("CORE"), Some(core));
        assert_eq!(graph.find("Missing"), None);
    }

    #[test]
    fn test_dependency_order_puts_references_first() {
        let (graph, core, data, app) = chain();
        assert_eq!(graph.dependency_order().unwrap(), vec![core, data, app]);
    }

    #[test]
    fn test_dependency_order_reports_cycle() {
        let (mut graph, core, _, app) = chain();
        graph.add_reference(core, app).unwrap();

        match graph.dependency_order() {
            Err(SnitchError::Graph(GraphError::CyclicReference { cycle })) => {
                assert_eq!(cycle.len(), 4);
                assert_eq!(cycle.first(), cycle.last());
            }
            other => panic!("expected cycle error, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_to_unknown_id_fails() {
        let (mut graph, core, _, _) = chain();
        assert!(graph.add_reference(core, ProjectId(42)).is_err());
    }
}
