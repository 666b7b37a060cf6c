//! Operating-system abstraction.
//!
//! Installation classification only needs three host facts: how executable
//! names are suffixed, whether the host follows Windows directory
//! conventions, and what a PATH search finds. Everything else in the crate
//! goes through this trait so that directory-layout logic stays testable on
//! any platform.

mod host;
pub mod mock;

pub use host::HostOs;
pub use mock::MockOs;

use std::path::PathBuf;

/// Host capabilities the resolver depends on.
pub trait OperatingSystem: Send + Sync {
    /// Platform-correct executable name for a base name (`java` ->
    /// `java.exe` on the Windows family, unchanged elsewhere).
    fn executable_name(&self, base: &str) -> String;

    /// Whether the host follows Windows conventions (executable suffixes,
    /// versioned sibling `jreN`/`jdkN.N.N` install directories).
    fn is_windows_family(&self) -> bool;

    /// Search the PATH for an already-suffixed executable name.
    ///
    /// Returns the absolute path of the first match, or `None`.
    fn find_in_path(&self, name: &str) -> Option<PathBuf>;
}
