//! Vendor-specific behavior dispatch.
//!
//! A handful of JVM distributions deviate from the stock layout in small,
//! well-known ways. Dispatch is a case-insensitive substring match on the
//! reported vendor string; the overrides live in a behavior table on the
//! enum rather than a type hierarchy.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// JVM distribution family, selected from the reported vendor string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    #[default]
    Generic,

    /// Legacy Apple-shipped JVMs (JavaVM.framework bundles).
    Apple,

    /// IBM J9 and descendants.
    Ibm,
}

impl Vendor {
    /// Pick the variant for a reported vendor string.
    pub fn from_vendor_string(vendor: &str) -> Self {
        let lower = vendor.to_lowercase();
        if lower.contains("apple") {
            Vendor::Apple
        } else if lower.contains("ibm") {
            Vendor::Ibm
        } else {
            Vendor::Generic
        }
    }

    /// Vendor view of the classified `tools.jar`.
    ///
    /// Legacy Apple JVMs ship compiler classes inside the framework bundle
    /// (`../Classes/classes.jar`), not as `lib/tools.jar`, so the model
    /// reports none rather than a path that will not exist at compile time.
    pub fn tools_jar(&self, classified: Option<&Path>) -> Option<PathBuf> {
        match self {
            Vendor::Apple => None,
            Vendor::Generic | Vendor::Ibm => classified.map(Path::to_path_buf),
        }
    }

    /// Whether Apple-launcher environment variables must be dropped before
    /// handing the environment to a forked java process.
    pub fn filters_launcher_env(&self) -> bool {
        matches!(self, Vendor::Apple)
    }

    pub fn is_ibm(&self) -> bool {
        matches!(self, Vendor::Ibm)
    }
}

/// Apple's launcher injects per-app variables that must not leak into
/// child JVMs.
pub(crate) fn is_apple_launcher_var(name: &str) -> bool {
    name.starts_with("APP_NAME_") || name.starts_with("JAVA_MAIN_CLASS_")
}
