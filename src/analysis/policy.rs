//! Describes how a declared version relates to the version found transitively.
//!
//! Only used to explain "might be removed" findings. Whether a finding is
//! removable is decided by exact version equality alone.

use crate::model::PackageVersion;
use serde::Serialize;
use std::fmt;

/// Outcome of comparing a declared version against a transitive one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionComparison {
    /// Declared version is newer
    pub is_greater: bool,
    /// A missing or pre-release version makes the direction unreliable
    pub indeterminate: bool,
}

/// Compare a declared version with the version found through another reference
pub fn compare_versions(
    declared: Option<&PackageVersion>,
    found: Option<&PackageVersion>,
) -> VersionComparison {
    match (declared, found) {
        (Some(declared), Some(found)) => VersionComparison {
            is_greater: declared > found,
            indeterminate: declared.is_prerelease() || found.is_prerelease(),
        },
        (Some(_), None) => VersionComparison {
            is_greater: true,
            indeterminate: true,
        },
        (None, _) => VersionComparison {
            is_greater: false,
            indeterminate: true,
        },
    }
}

/// Human-readable classification of a version mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchReason {
    /// Declared version is newer
    Updated,
    /// Declared version looks newer, but a pre-release is involved
    MightBeUpdated,
    /// Declared version is older
    Downgraded,
    /// Versions differ and their order is unclear
    DoesNotMatch,
}

impl From<VersionComparison> for MismatchReason {
    fn from(comparison: VersionComparison) -> Self {
        match (comparison.is_greater, comparison.indeterminate) {
            (true, false) => MismatchReason::Updated,
            (true, true) => MismatchReason::MightBeUpdated,
            (false, false) => MismatchReason::Downgraded,
            (false, true) => MismatchReason::DoesNotMatch,
        }
    }
}

impl MismatchReason {
    /// Verb phrase used in reports, followed by the transitive version
    pub fn verb(self) -> &'static str {
        match self {
            MismatchReason::Updated => "Updated from",
            MismatchReason::MightBeUpdated => "Might be updated from",
            MismatchReason::Downgraded => "Downgraded from",
            MismatchReason::DoesNotMatch => "Does not match",
        }
    }
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
