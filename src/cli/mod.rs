//! Command line interface for snitch.
//!
//! Loads a graph description, analyzes every selected project and prints the
//! findings as text or JSON.

mod args;
mod output;
mod report;

pub use args::{Args, OutputFormat, RuntimeConfig};
pub use output::{OutputManager, Table, Tone};
pub use report::{ReportLine, json_report, print_text, text_report};

use crate::analysis::{ProjectAnalyzer, ProjectAnalyzerResult};
use crate::error::{CliError, GraphError, Result};
use crate::graph::ProjectGraph;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args)
}

/// Execute an analysis run and return the process exit code
pub fn execute(args: &Args) -> Result<i32> {
    if let Err(reason) = args.validate() {
        let output = OutputManager::new(false);
        output.error(&CliError::InvalidArguments { reason }.to_string());
        return Ok(1);
    }

    let config = RuntimeConfig::from(args);
    let graph = ProjectGraph::load(&args.graph)?;
    let results = analyze_graph(&graph, &config)?;
    if results.is_empty() {
        config
            .output()
            .warn("No projects were analyzed")
            .map_err(CliError::from)?;
    }

    match config.format {
        OutputFormat::Text => {
            let report = text_report(&results, config.no_prerelease);
            print_text(&report, config.output())?;
        }
        OutputFormat::Json => {
            let json = json_report(&results)?;
            config.output().document(&json).map_err(CliError::from)?;
        }
    }

    Ok(exit_code(&results, &config))
}

/// Analyze the selected projects of a graph, dependencies before dependents
pub fn analyze_graph(
    graph: &ProjectGraph,
    config: &RuntimeConfig,
) -> Result<Vec<ProjectAnalyzerResult>> {
    let analyzer = ProjectAnalyzer::new(graph);

    let selected = match &config.project {
        Some(name) => vec![graph.find(name).ok_or_else(|| GraphError::ProjectNotFound {
            name: name.clone(),
        })?],
        None => graph.dependency_order()?,
    };

    let mut results = Vec::with_capacity(selected.len());
    for id in selected {
        let project = graph.project(id)?;
        if config.is_skipped(project.name.as_str()) {
            log::info!("Skipping {}", project.name);
            continue;
        }

        log::info!("Analyzing {}", project.name);
        let result = analyzer.analyze(id)?;
        results.push(result.filter(config.excluded_packages()));
    }

    Ok(results)
}

/// Strict mode fails when anything was found
pub fn exit_code(results: &[ProjectAnalyzerResult], config: &RuntimeConfig) -> i32 {
    if !config.strict {
        return 0;
    }

    let found = results.iter().any(|r| !r.nothing_to_remove())
        || (config.no_prerelease && results.iter().any(ProjectAnalyzerResult::has_pre_releases));

    if found { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    const GRAPH: &str = r#"
        [[project]]
        name = "Core"
        target-framework = "net8.0"

        [[project.package]]
        name = "Serilog"
        version = "3.1.1"

        [[project]]
        name = "App"
        target-framework = "net8.0"
        references = ["Core"]

        [[project.package]]
        name = "Serilog"
        version = "3.1.1"

        [[project.package]]
        name = "Polly"
        version = "8.0.0-beta.1"
    "#;

    fn config(extra: &[&str]) -> RuntimeConfig {
        let mut argv = vec!["snitch", "graph.toml"];
        argv.extend_from_slice(extra);
        RuntimeConfig::from(&Args::try_parse_from(argv).unwrap())
    }

    fn graph() -> ProjectGraph {
        ProjectGraph::from_toml_str(GRAPH, Path::new(".")).unwrap()
    }

    #[test]
    fn test_results_follow_dependency_order() {
        let results = analyze_graph(&graph(), &config(&[])).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.project().as_str()).collect();
        assert_eq!(names, ["Core", "App"]);
        assert_eq!(results[1].can_be_removed().len(), 1);
    }

    #[test]
    fn test_excluded_packages_are_filtered() {
        let results = analyze_graph(&graph(), &config(&["-e", "serilog"])).unwrap();
        assert!(results.iter().all(ProjectAnalyzerResult::nothing_to_remove));
    }

    #[test]
    fn test_strict_exit_codes() {
        let graph = graph();

        let lenient = config(&[]);
        assert_eq!(exit_code(&analyze_graph(&graph, &lenient).unwrap(), &lenient), 0);

        let strict = config(&["--strict"]);
        assert_eq!(exit_code(&analyze_graph(&graph, &strict).unwrap(), &strict), 1);

        let strict_excluded = config(&["--strict", "-e", "Serilog"]);
        let results = analyze_graph(&graph, &strict_excluded).unwrap();
        assert_eq!(exit_code(&results, &strict_excluded), 0);

        let strict_prerelease = config(&["--strict", "-e", "Serilog", "--no-prerelease"]);
        let results = analyze_graph(&graph, &strict_prerelease).unwrap();
        assert_eq!(exit_code(&results, &strict_prerelease), 1);
    }

    #[test]
    fn test_single_project_selection() {
        let results = analyze_graph(&graph(), &config(&["-p", "app"])).unwrap();
        assert_eq!(results.len(), 1);

        assert!(analyze_graph(&graph(), &config(&["-p", "Ghost"])).is_err());
    }
}
