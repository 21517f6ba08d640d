//! Package references declared by a project.

use crate::model::{PackageName, PackageVersion};
use serde::Serialize;

/// Asset flags kept private to the declaring project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrivateAssets(Vec<String>);

impl PrivateAssets {
    /// Parse a `;` or `,` separated flag list such as `compile;runtime`
    pub fn parse(flags: &str) -> Self {
        Self(
            flags
                .split([';', ','])
                .map(str::trim)
                .filter(|flag| !flag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Whether a flag is set, ignoring case
    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f.eq_ignore_ascii_case(flag))
    }

    /// A package with private `compile` or `all` assets is invisible to consumers
    pub fn blocks_propagation(&self) -> bool {
        self.contains("compile") || self.contains("all")
    }

    /// Flags in declaration order
    pub fn flags(&self) -> &[String] {
        &self.0
    }
}

/// A package reference
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    /// Package id
    pub name: PackageName,
    /// Declared version, `None` when unspecified
    pub version: Option<PackageVersion>,
    /// Private asset flags, if declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_assets: Option<PrivateAssets>,
}

impl Package {
    /// Create a package reference without private assets
    pub fn new(name: impl Into<PackageName>, version: Option<PackageVersion>) -> Self {
        Self {
            name: name.into(),
            version,
            private_assets: None,
        }
    }

    /// Attach private asset flags
    pub fn with_private_assets(mut self, flags: &str) -> Self {
        self.private_assets = Some(PrivateAssets::parse(flags));
        self
    }

    /// Whether consumers of the declaring project see this package
    pub fn propagates(&self) -> bool {
        !self
            .private_assets
            .as_ref()
            .is_some_and(PrivateAssets::blocks_propagation)
    }

    /// Whether the declared version is a pre-release
    pub fn is_prerelease(&self) -> bool {
        self.version
            .as_ref()
            .is_some_and(PackageVersion::is_prerelease)
    }

    /// Version for display, `*` when unspecified
    pub fn version_string(&self) -> String {
        self.version
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "*".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_assets_all_blocks_propagation() {
        let package = Package::new("StyleCop.Analyzers", None).with_private_assets("All");
        assert!(!package.propagates());
    }

    #[test]
    fn test_private_assets_compile_among_others_blocks_propagation() {
        let assets = PrivateAssets::parse("runtime; Compile ,build");
        assert_eq!(assets.flags(), ["runtime", "Compile", "build"]);
        assert!(assets.blocks_propagation());
    }

    #[test]
    fn test_private_runtime_assets_still_propagate() {
        let package = Package::new("Serilog", None).with_private_assets("runtime;contentfiles");
        assert!(package.propagates());
        assert!(Package::new("Serilog", None).propagates());
    }

    #[test]
    fn test_version_string_for_unspecified_version() {
        assert_eq!(Package::new("Serilog", None).version_string(), "*");
    }
}
