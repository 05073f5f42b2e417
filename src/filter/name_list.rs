use super::PackageFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// How a `PackageNameFilter` treats the origins in its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Only listed origins pass.
    #[default]
    Whitelist,
    /// Every origin except the listed ones passes.
    Blacklist,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whitelist" | "allow" => Ok(FilterMode::Whitelist),
            "blacklist" | "deny" => Ok(FilterMode::Blacklist),
            _ => Err(format!(
                "Invalid filter mode '{s}'. Expected 'whitelist' or 'blacklist'"
            )),
        }
    }
}

/// Filters on exact origin identifiers.
///
/// Duplicate names collapse and order is irrelevant. Matching is exact:
/// listing `my_app` does not cover `my_app::net`.
#[derive(Debug, Clone)]
pub struct PackageNameFilter {
    package_names: HashSet<String>,
    mode: FilterMode,
}

impl PackageNameFilter {
    pub fn new<I, S>(package_names: I, is_whitelist: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mode = if is_whitelist {
            FilterMode::Whitelist
        } else {
            FilterMode::Blacklist
        };
        Self::with_mode(package_names, mode)
    }

    pub fn with_mode<I, S>(package_names: I, mode: FilterMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package_names: package_names.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    pub fn whitelist<I, S>(package_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_mode(package_names, FilterMode::Whitelist)
    }

    pub fn blacklist<I, S>(package_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_mode(package_names, FilterMode::Blacklist)
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.package_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.package_names.is_empty()
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.package_names.contains(origin)
    }
}

impl PackageFilter for PackageNameFilter {
    fn filter(&self, origin: &str) -> bool {
        let listed = self.contains(origin);
        match self.mode {
            FilterMode::Whitelist => listed,
            FilterMode::Blacklist => !listed,
        }
    }
}
