//! Redundant reference analysis.
//!
//! [`ProjectAnalyzer`] walks the project graph below a root project and reports
//! which of the root's direct package and project references are already
//! provided by another reference. The findings are collected in a
//! [`ProjectAnalyzerResult`].

mod accumulator;
mod analyzer;
mod findings;
mod policy;
mod result;

pub use accumulator::{FindingLookup, PackageLookup, ProjectReferenceLookup};
pub use analyzer::ProjectAnalyzer;
pub use findings::{
    PackageToRemove, ProjectPackage, ProjectReferenceToRemove, ProjectReferencedProject,
};
pub use policy::{MismatchReason, VersionComparison, compare_versions};
pub use result::ProjectAnalyzerResult;
