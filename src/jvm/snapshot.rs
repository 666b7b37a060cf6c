//! Ambient java configuration snapshot.
//!
//! Detection is a pure function of one of these snapshots; the environment
//! is read exactly once, at capture time. The process-wide cache in
//! [`Jvm::current`](crate::jvm::Jvm::current) holds only the derived model,
//! never the raw ambient reads, so tests can swap the reported
//! home/version/vendor between cases and re-detect.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{JvmScoutError, Result};
use crate::sys::OperatingSystem;

use super::version::JavaVersion;

/// What the host reports about its java installation, captured at one
/// moment: home directory, version string, vendor string.
#[derive(Debug, Clone)]
pub struct JavaSnapshot {
    pub java_home: PathBuf,
    pub version: JavaVersion,
    pub vendor: String,
}

impl JavaSnapshot {
    /// Build a snapshot from explicit values.
    pub fn new(java_home: impl Into<PathBuf>, version: JavaVersion, vendor: impl Into<String>) -> Self {
        Self {
            java_home: java_home.into(),
            version,
            vendor: vendor.into(),
        }
    }

    /// Snapshot for an explicitly supplied home directory.
    ///
    /// Version and vendor still come from the environment, but the home is
    /// taken as given, so this never fails: an unreported or unparseable
    /// version falls back to inference from the directory name.
    pub fn for_home(java_home: impl Into<PathBuf>) -> Self {
        let java_home = java_home.into();
        let version = nonempty_var("JAVA_VERSION")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| infer_version(&java_home));
        let vendor = nonempty_var("JAVA_VENDOR").unwrap_or_default();
        Self {
            java_home,
            version,
            vendor,
        }
    }

    /// Capture the snapshot from the process environment.
    ///
    /// `JAVA_HOME` names the installation; when unset, the home is derived
    /// from the `java` found on PATH (grandparent of the executable).
    /// `JAVA_VERSION` and `JAVA_VENDOR` refine the result; a missing version
    /// is inferred from the home directory name, else assumed Java 9+.
    pub fn from_env(os: &dyn OperatingSystem) -> Result<Self> {
        let java_home = match nonempty_var("JAVA_HOME") {
            Some(home) => PathBuf::from(home),
            None => home_from_path_search(os)?,
        };

        let version = match nonempty_var("JAVA_VERSION") {
            Some(raw) => raw.parse()?,
            None => infer_version(&java_home),
        };

        let vendor = nonempty_var("JAVA_VENDOR").unwrap_or_default();

        debug!(
            home = %java_home.display(),
            version = %version,
            vendor = %vendor,
            "captured java snapshot"
        );

        Ok(Self {
            java_home,
            version,
            vendor,
        })
    }
}

fn nonempty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Walk from `<dir>/java` on PATH up to the installation root.
fn home_from_path_search(os: &dyn OperatingSystem) -> Result<PathBuf> {
    let java = os
        .find_in_path(&os.executable_name("java"))
        .ok_or(JvmScoutError::JavaHomeUndetected)?;
    let resolved = java.canonicalize().unwrap_or(java);
    resolved
        .parent() // bin/
        .and_then(Path::parent) // home
        .map(Path::to_path_buf)
        .ok_or(JvmScoutError::JavaHomeUndetected)
}

fn infer_version(java_home: &Path) -> JavaVersion {
    let inferred = java_home
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(JavaVersion::infer_from_dir_name);
    match inferred {
        Some(version) => version,
        None => {
            debug!("no reported java version; assuming modern (9+) layout semantics");
            JavaVersion::from_major(9)
        }
    }
}
