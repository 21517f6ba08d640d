//! Text and JSON rendering of analysis results.

use super::output::{OutputManager, Table, Tone};
use crate::analysis::{MismatchReason, PackageToRemove, ProjectAnalyzerResult};
use crate::error::{CliError, Result};
use crate::model::{Package, PackageName, ProjectName};
use serde::Serialize;

/// One block of the text report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Everything is fine
    Success(String),
    /// Section title, with the project it is about
    Heading {
        /// Section title
        title: String,
        /// Analyzed project
        project: Option<String>,
    },
    /// Findings of the preceding heading
    Table(Table),
}

impl ReportLine {
    fn heading(title: &str, project: &ProjectName) -> Self {
        ReportLine::Heading {
            title: title.to_string(),
            project: Some(project.to_string()),
        }
    }
}

/// Build the text report
pub fn text_report(results: &[ProjectAnalyzerResult], no_prerelease: bool) -> Vec<ReportLine> {
    let pre_releases: Vec<&ProjectAnalyzerResult> =
        results.iter().filter(|r| r.has_pre_releases()).collect();

    if results.iter().all(ProjectAnalyzerResult::nothing_to_remove)
        && (!no_prerelease || pre_releases.is_empty())
    {
        return vec![ReportLine::Success("Everything looks good!".to_string())];
    }

    let mut lines = Vec::new();

    for result in results.iter().filter(|r| !r.can_be_removed().is_empty()) {
        let mut table = Table::new([
            ("Package", Tone::Subject),
            ("Referenced by", Tone::Provider),
        ]);
        for item in result.can_be_removed() {
            table.push([item.package.name.to_string(), item.original.project.to_string()]);
        }
        lines.push(ReportLine::heading("Packages that can be removed from", result.project()));
        lines.push(ReportLine::Table(table));
    }

    for result in results.iter().filter(|r| !r.can_be_removed_projects().is_empty()) {
        let mut table = Table::new([
            ("Project", Tone::Subject),
            ("Referenced by", Tone::Provider),
        ]);
        for item in result.can_be_removed_projects() {
            table.push([
                item.referenced_project.to_string(),
                item.original.project.to_string(),
            ]);
        }
        lines.push(ReportLine::heading("Projects that can be removed from", result.project()));
        lines.push(ReportLine::Table(table));
    }

    for result in results.iter().filter(|r| !r.might_be_removed().is_empty()) {
        let mut table = Table::new([
            ("Package", Tone::Subject),
            ("Version", Tone::Plain),
            ("Reason", Tone::Muted),
        ]);
        for item in result.might_be_removed() {
            let reason = item.mismatch_reason().unwrap_or(MismatchReason::DoesNotMatch);
            table.push([
                item.package.name.to_string(),
                item.package.version_string(),
                format!(
                    "{} {} in {}",
                    reason,
                    item.original.package.version_string(),
                    item.original.project
                ),
            ]);
        }
        lines.push(ReportLine::heading(
            "Packages that might be removed from",
            result.project(),
        ));
        lines.push(ReportLine::Table(table));
    }

    if no_prerelease && !pre_releases.is_empty() {
        let mut rows: Vec<(&ProjectName, &Package)> = pre_releases
            .iter()
            .flat_map(|r| r.pre_release_packages().iter().map(move |p| (r.project(), p)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));

        let mut table = Table::new([
            ("Project", Tone::Subject),
            ("Package", Tone::Attention),
            ("Version", Tone::Plain),
        ]);
        for (project, package) in rows {
            table.push([
                project.to_string(),
                package.name.to_string(),
                package.version_string(),
            ]);
        }
        lines.push(ReportLine::Heading {
            title: "Projects with pre-release package references".to_string(),
            project: None,
        });
        lines.push(ReportLine::Table(table));
    }

    lines
}

/// Print a text report
pub fn print_text(lines: &[ReportLine], output: &OutputManager) -> Result<()> {
    for line in lines {
        let written = match line {
            ReportLine::Success(message) => output.success(message),
            ReportLine::Heading { title, project } => output.heading(title, project.as_deref()),
            ReportLine::Table(table) => output.table(table),
        };
        written.map_err(CliError::from)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    nothing_to_remove: bool,
    projects: Vec<JsonProject<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonProject<'a> {
    project: &'a ProjectName,
    can_be_removed: Vec<JsonPackage<'a>>,
    might_be_removed: Vec<JsonPackage<'a>>,
    can_be_removed_projects: Vec<JsonProjectReference<'a>>,
    pre_release_packages: &'a [Package],
}

#[derive(Debug, Serialize)]
struct JsonPackage<'a> {
    package: &'a PackageName,
    version: String,
    referenced_by: &'a ProjectName,
    referenced_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<MismatchReason>,
}

#[derive(Debug, Serialize)]
struct JsonProjectReference<'a> {
    project: &'a ProjectName,
    referenced_by: &'a ProjectName,
}

fn json_package(item: &PackageToRemove) -> JsonPackage<'_> {
    JsonPackage {
        package: &item.package.name,
        version: item.package.version_string(),
        referenced_by: &item.original.project,
        referenced_version: item.original.package.version_string(),
        reason: item.mismatch_reason(),
    }
}

/// Render results as a JSON document
pub fn json_report(results: &[ProjectAnalyzerResult]) -> Result<String> {
    let report = JsonReport {
        nothing_to_remove: results.iter().all(ProjectAnalyzerResult::nothing_to_remove),
        projects: results
            .iter()
            .map(|result| JsonProject {
                project: result.project(),
                can_be_removed: result.can_be_removed().iter().map(json_package).collect(),
                might_be_removed: result.might_be_removed().iter().map(json_package).collect(),
                can_be_removed_projects: result
                    .can_be_removed_projects()
                    .iter()
                    .map(|item| JsonProjectReference {
                        project: &item.referenced_project,
                        referenced_by: &item.original.project,
                    })
                    .collect(),
                pre_release_packages: result.pre_release_packages(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
