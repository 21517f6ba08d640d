//! Target framework names.

use std::fmt;

/// Framework family a target framework belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameworkIdentifier {
    /// `.NETCoreApp` (`netcoreapp3.1`, `net5.0` and later)
    NetCoreApp,
    /// `.NETStandard`
    NetStandard,
    /// `.NETFramework` (`net472`, `net48`)
    NetFramework,
    /// Anything else, lower-cased
    Other(String),
}

impl fmt::Display for FrameworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameworkIdentifier::NetCoreApp => f.write_str(".NETCoreApp"),
            FrameworkIdentifier::NetStandard => f.write_str(".NETStandard"),
            FrameworkIdentifier::NetFramework => f.write_str(".NETFramework"),
            FrameworkIdentifier::Other(name) => f.write_str(name),
        }
    }
}

/// A parsed target framework moniker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFramework {
    short_name: String,
    identifier: FrameworkIdentifier,
}

impl TargetFramework {
    /// Parse a short name (`net8.0-windows`) or a full name (`.NETCoreApp,Version=v8.0`)
    pub fn parse(name: &str) -> Self {
        let short_name = name.trim().to_lowercase();
        let identifier = Self::identify(&short_name);
        Self {
            short_name,
            identifier,
        }
    }

    fn identify(name: &str) -> FrameworkIdentifier {
        if let Some(full) = name.strip_prefix('.') {
            let family = full.split(',').next().unwrap_or(full).trim();
            return match family {
                "netcoreapp" => FrameworkIdentifier::NetCoreApp,
                "netstandard" => FrameworkIdentifier::NetStandard,
                "netframework" => FrameworkIdentifier::NetFramework,
                other => FrameworkIdentifier::Other(format!(".{}", other)),
            };
        }

        // Platform suffix (`-windows10.0.19041`) does not change the family
        let base = name.split('-').next().unwrap_or(name);

        if base.starts_with("netcoreapp") {
            FrameworkIdentifier::NetCoreApp
        } else if base.starts_with("netstandard") {
            FrameworkIdentifier::NetStandard
        } else if let Some(version) = base.strip_prefix("net") {
            match version.split_once('.') {
                Some((major, _)) => match major.parse::<u32>() {
                    Ok(major) if major >= 5 => FrameworkIdentifier::NetCoreApp,
                    Ok(_) => FrameworkIdentifier::NetFramework,
                    Err(_) => FrameworkIdentifier::Other(base.to_string()),
                },
                None if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit()) => {
                    FrameworkIdentifier::NetFramework
                }
                None => FrameworkIdentifier::Other(base.to_string()),
            }
        } else {
            FrameworkIdentifier::Other(base.to_string())
        }
    }

    /// Lower-cased name as given
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Framework family
    pub fn identifier(&self) -> &FrameworkIdentifier {
        &self.identifier
    }

    /// Same framework family, regardless of version
    pub fn same_family(&self, other: &TargetFramework) -> bool {
        self.identifier == other.identifier
    }
}

impl fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name)
    }
}
