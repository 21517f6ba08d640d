//! Project and package model handed to the analyzer.
//!
//! The model is built once by a loader and read-only afterwards. Identity of
//! projects and packages is their case-insensitive name.

mod name;
mod package;
mod project;
mod version;

pub use name::{PackageName, ProjectName};
pub use package::{Package, PrivateAssets};
pub use project::{Project, ProjectId};
pub use version::PackageVersion;
