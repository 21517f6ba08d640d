//! Case-insensitive names for projects and packages.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! case_insensitive_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            display: String,
            key: String,
        }

        impl $name {
            /// Create a name, keeping the original spelling for display
            pub fn new(name: impl Into<String>) -> Self {
                let display = name.into();
                let key = display.to_lowercase();
                Self { display, key }
            }

            /// Name as originally written
            pub fn as_str(&self) -> &str {
                &self.display
            }

            /// Normalized comparison key
            pub fn key(&self) -> &str {
                &self.key
            }

            /// Compare against a plain string, ignoring case
            pub fn matches(&self, other: &str) -> bool {
                self.key == other.to_lowercase()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.key.hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.key.cmp(&other.key)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.display)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.display)
            }
        }
    };
}

case_insensitive_name!(
    /// Project identity; `MyApp` and `myapp` are the same project
    ProjectName
);

case_insensitive_name!(
    /// Package identity; `Newtonsoft.Json` and `newtonsoft.json` are the same package
    PackageName
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_compare_case_insensitively() {
        assert_eq!(PackageName::new("Newtonsoft.Json"), PackageName::new("NEWTONSOFT.JSON"));
        assert_ne!(ProjectName::new("Core"), ProjectName::new("Core.Tests"));
    }

    #[test]
    fn test_display_keeps_original_spelling() {
        let name = ProjectName::new("MyApp.Web");
        assert_eq!(name.to_string(), "MyApp.Web");
        assert_eq!(name.key(), "myapp.web");
    }

    #[test]
    fn test_hash_uses_key() {
        let mut set = HashSet::new();
        set.insert(PackageName::new("Serilog"));
        assert!(set.contains(&PackageName::new("serilog")));
        assert!(PackageName::new("Serilog").matches("SERILOG"));
    }
}
