#[cfg(test)]
mod tests {
    use snitch::analysis::MismatchReason;
    use snitch::error::{GraphError, SnitchError};
    use snitch::{ProjectAnalyzer, ProjectGraph};
    use std::path::Path;

    fn graph(description: &str) -> ProjectGraph {
        ProjectGraph::from_toml_str(description, Path::new(".")).unwrap()
    }

    #[test]
    fn test_first_seen_provenance_wins() {
        let graph = graph(
            r#"
            [[project]]
            name = "Root"
            target-framework = "net8.0"
            references = ["A", "B"]

            [[project.package]]
            name = "PackageX"
            version = "1.0"

            [[project]]
            name = "A"
            target-framework = "net8.0"

            [[project.package]]
            name = "PackageX"
            version = "1.0"

            [[project]]
            name = "B"
            target-framework = "net8.0"

            [[project.package]]
            name = "PackageX"
            version = "1.0"
            "#,
        );

        let result = ProjectAnalyzer::new(&graph).analyze_named("Root").unwrap();

        assert_eq!(result.can_be_removed().len(), 1);
        assert_eq!(result.can_be_removed()[0].original.project.as_str(), "A");
        assert!(result.might_be_removed().is_empty());
        assert!(result.can_be_removed_projects().is_empty());
    }

    #[test]
    fn test_deep_chain_reports_origin_and_redundant_reference() {
        let graph = graph(
            r#"
            [[project]]
            name = "App"
            target-framework = "net8.0"
            references = ["Web", "Data"]

            [[project.package]]
            name = "Newtonsoft.Json"
            version = "13.0.1"

            [[project]]
            name = "Web"
            target-framework = "net8.0"
            references = ["Data"]

            [[project]]
            name = "Data"
            target-framework = "net8.0"

            [[project.package]]
            name = "newtonsoft.json"
            version = "13.0.3"
            "#,
        );

        let result = ProjectAnalyzer::new(&graph).analyze_named("app").unwrap();

        assert!(result.can_be_removed().is_empty());
        let might = result.might_be_removed();
        assert_eq!(might.len(), 1);
        assert_eq!(might[0].original.project.as_str(), "Data");
        assert_eq!(might[0].mismatch_reason(), Some(MismatchReason::Downgraded));

        let projects = result.can_be_removed_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].referenced_project.as_str(), "Data");
        assert_eq!(projects[0].original.project.as_str(), "Web");
    }

    #[test]
    fn test_private_assets_do_not_propagate() {
        let graph = graph(
            r#"
            [[project]]
            name = "App"
            target-framework = "net8.0"
            references = ["Core"]

            [[project.package]]
            name = "StyleCop.Analyzers"
            version = "1.1.118"

            [[project.package]]
            name = "Polly"
            version = "8.2.0"

            [[project]]
            name = "Core"
            target-framework = "net8.0"

            [[project.package]]
            name = "StyleCop.Analyzers"
            version = "1.1.118"
            private-assets = "all"

            [[project.package]]
            name = "Polly"
            version = "8.2.0"
            private-assets = "runtime"
            "#,
        );

        let result = ProjectAnalyzer::new(&graph).analyze_named("App").unwrap();

        assert_eq!(result.can_be_removed().len(), 1);
        assert_eq!(result.can_be_removed()[0].package.name.as_str(), "Polly");
    }

    #[test]
    fn test_private_package_is_hidden_from_every_ancestor() {
        let graph = graph(
            r#"
            [[project]]
            name = "Root"
            target-framework = "net8.0"
            references = ["Mid"]

            [[project.package]]
            name = "Microsoft.CodeAnalysis.NetAnalyzers"
            version = "8.0.0"

            [[project]]
            name = "Mid"
            target-framework = "net8.0"
            references = ["Leaf"]

            [[project]]
            name = "Leaf"
            target-framework = "net8.0"

            [[project.package]]
            name = "Microsoft.CodeAnalysis.NetAnalyzers"
            version = "8.0.0"
            private-assets = "all"
            "#,
        );

        let analyzer = ProjectAnalyzer::new(&graph);
        assert!(analyzer.analyze_named("Root").unwrap().nothing_to_remove());
        assert!(analyzer.analyze_named("Mid").unwrap().nothing_to_remove());
    }

    #[test]
    fn test_shared_project_in_diamond_is_reported_once() {
        let graph = graph(
            r#"
            [[project]]
            name = "Root"
            target-framework = "net8.0"
            references = ["A", "B", "C"]

            [[project.package]]
            name = "Dapper"
            version = "2.1.28"

            [[project]]
            name = "A"
            target-framework = "net8.0"
            references = ["C"]

            [[project]]
            name = "B"
            target-framework = "net8.0"
            references = ["C"]

            [[project]]
            name = "C"
            target-framework = "net8.0"

            [[project.package]]
            name = "Dapper"
            version = "2.1.28"
            "#,
        );

        let result = ProjectAnalyzer::new(&graph).analyze_named("Root").unwrap();

        let packages = result.can_be_removed();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].original.project.as_str(), "C");

        let projects = result.can_be_removed_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].referenced_project.as_str(), "C");
        assert_eq!(projects[0].original.project.as_str(), "A");
    }

    #[test]
    fn test_legacy_project_only_reports_packages() {
        let graph = graph(
            r#"
            [[project]]
            name = "Legacy"
            target-framework = "net472"
            sdk = false
            references = ["Lib", "Util"]

            [[project.package]]
            name = "log4net"
            version = "2.0.15"

            [[project]]
            name = "Lib"
            target-framework = "net472"
            references = ["Util"]

            [[project]]
            name = "Util"
            target-framework = "net472"

            [[project.package]]
            name = "log4net"
            version = "2.0.15"
            "#,
        );

        let result = ProjectAnalyzer::new(&graph).analyze_named("Legacy").unwrap();

        assert_eq!(result.can_be_removed().len(), 1);
        assert!(result.can_be_removed_projects().is_empty());
    }

    #[test]
    fn test_lock_file_prunes_implicit_dependencies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("project.assets.json"),
            r#"{
                "version": 3,
                "project": {
                    "frameworks": {
                        "net8.0": {
                            "targetAlias": "net8.0",
                            "dependencies": {
                                "Microsoft.SourceLink.GitHub": {
                                    "target": "Package",
                                    "version": "[8.0.0, )",
                                    "suppressParent": "All"
                                },
                                "Serilog": {
                                    "target": "Package",
                                    "version": "[3.1.1, )"
                                }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let description = r#"
            [[project]]
            name = "App"
            target-framework = "net8.0"
            lock-file = "project.assets.json"
            references = ["Core"]

            [[project.package]]
            name = "Microsoft.SourceLink.GitHub"
            version = "8.0.0"

            [[project.package]]
            name = "Serilog"
            version = "3.1.1"

            [[project]]
            name = "Core"
            target-framework = "net8.0"

            [[project.package]]
            name = "Microsoft.SourceLink.GitHub"
            version = "8.0.0"

            [[project.package]]
            name = "Serilog"
            version = "3.1.1"
        "#;
        let graph = ProjectGraph::from_toml_str(description, dir.path()).unwrap();

        let result = ProjectAnalyzer::new(&graph).analyze_named("App").unwrap();

        let names: Vec<&str> = result
            .can_be_removed()
            .iter()
            .map(|item| item.package.name.as_str())
            .collect();
        assert_eq!(names, ["Serilog"]);
    }

    #[test]
    fn test_missing_lock_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let description = r#"
            [[project]]
            name = "App"
            target-framework = "net8.0"
            lock-file = "missing.json"
        "#;
        let graph = ProjectGraph::from_toml_str(description, dir.path()).unwrap();

        let err = ProjectAnalyzer::new(&graph).analyze_named("App").unwrap_err();
        assert!(matches!(err, SnitchError::LockFile(_)));
    }

    #[test]
    fn test_cycle_is_reported() {
        let graph = graph(
            r#"
            [[project]]
            name = "A"
            target-framework = "net8.0"
            references = ["B"]

            [[project]]
            name = "B"
            target-framework = "net8.0"
            references = ["A"]
            "#,
        );

        let err = ProjectAnalyzer::new(&graph).analyze_named("A").unwrap_err();
        assert!(matches!(
            err,
            SnitchError::Graph(GraphError::CyclicReference { .. })
        ));
        assert!(graph.dependency_order().is_err());
    }
}
