//! Package versions as written in project files.
//!
//! Versions follow the `major[.minor[.patch[.revision]]][-prerelease][+metadata]`
//! shape. Missing components default to zero, so `1.0`, `1.0.0` and `1.0.0.0`
//! are the same version. Release labels compare without case and build
//! metadata never takes part in comparisons.

use crate::error::{Result, VersionError};
use semver::{BuildMetadata, Prerelease, Version};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed package version
#[derive(Debug, Clone)]
pub struct PackageVersion {
    version: Version,
    revision: u64,
    original: String,
}

impl PackageVersion {
    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self> {
        let original = input.trim();
        if original.is_empty() {
            return Err(VersionError::InvalidVersion {
                version: input.to_string(),
                reason: "version is empty".to_string(),
            }
            .into());
        }

        let (rest, build) = match original.split_once('+') {
            Some((rest, build)) => (rest, build),
            None => (original, ""),
        };
        let (numbers, pre) = match rest.split_once('-') {
            Some((numbers, pre)) => (numbers, pre),
            None => (rest, ""),
        };

        if (rest.len() != original.len() && build.is_empty())
            || (numbers.len() != rest.len() && pre.is_empty())
        {
            return Err(VersionError::InvalidVersion {
                version: original.to_string(),
                reason: "empty pre-release or metadata label".to_string(),
            }
            .into());
        }

        let parts = numbers
            .split('.')
            .map(|part| {
                part.parse::<u64>().map_err(|_| VersionError::InvalidVersion {
                    version: original.to_string(),
                    reason: format!("'{}' is not a numeric version component", part),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if parts.len() > 4 {
            return Err(VersionError::InvalidVersion {
                version: original.to_string(),
                reason: "at most four numeric components are allowed".to_string(),
            }
            .into());
        }

        let component = |index: usize| parts.get(index).copied().unwrap_or(0);

        let mut version = Version::new(component(0), component(1), component(2));
        version.pre = Prerelease::new(&pre.to_ascii_lowercase()).map_err(|source| {
            VersionError::ParseFailed {
                version: original.to_string(),
                source,
            }
        })?;
        version.build = BuildMetadata::new(build).map_err(|source| VersionError::ParseFailed {
            version: original.to_string(),
            source,
        })?;

        Ok(Self {
            version,
            revision: component(3),
            original: original.to_string(),
        })
    }

    /// Whether the version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    fn release_key(&self) -> (u64, u64, u64, u64) {
        (
            self.version.major,
            self.version.minor,
            self.version.patch,
            self.revision,
        )
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl Hash for PackageVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.release_key().hash(state);
        self.version.pre.hash(state);
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release_key()
            .cmp(&other.release_key())
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.version.pre.cmp(&other.version.pre),
            })
    }
}

impl FromStr for PackageVersion {
    type Err = crate::error::SnitchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Serialize for PackageVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}
