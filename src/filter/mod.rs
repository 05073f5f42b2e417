//! Origin filtering.
//!
//! A `PackageFilter` decides whether a log call issued from a given origin
//! (a module path such as `my_app::net`) should be emitted. Filters are
//! shared read-only between loggers and threads once built.

pub mod name_list;

#[cfg(test)]
use mockall::automock;

pub use name_list::{FilterMode, PackageNameFilter};

#[cfg_attr(test, automock)]
pub trait PackageFilter: Send + Sync {
    fn filter(&self, origin: &str) -> bool;
}

/// Accepts every origin. Installed on a logger unless another filter is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveFilter;

impl PermissiveFilter {
    pub fn new() -> Self {
        Self
    }
}

impl PackageFilter for PermissiveFilter {
    fn filter(&self, _origin: &str) -> bool {
        true
    }
}
