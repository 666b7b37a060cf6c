//! The resolved JVM model.
//!
//! A [`Jvm`] is built once from a filesystem snapshot and answers path
//! queries for as long as the caller holds it: home directory, tool
//! executables, the embedded or peer JRE, `tools.jar`. Two instances are
//! interchangeable whenever they resolve to the same home directory,
//! regardless of how they were constructed.
//!
//! # Executable lookup contract
//!
//! The primary `java` executable is load-bearing for everything else, so a
//! home in which it cannot be found fails *construction* with
//! [`JvmScoutError::JavaHome`]. Every other tool goes through
//! [`Jvm::executable`], which never fails: home `bin/`, then a PATH search,
//! then the bare suffixed name for the OS to resolve at invocation time.
//! The asymmetry is deliberate and callers rely on both halves of it.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{JvmScoutError, Result};
use crate::sys::{HostOs, OperatingSystem};

use super::layout::{classify, InstallationKind, InstallationLayout};
use super::snapshot::JavaSnapshot;
use super::vendor::{is_apple_launcher_var, Vendor};
use super::version::JavaVersion;

/// Process-wide cache for [`Jvm::current`]. Holds only the derived model;
/// the ambient environment is re-read on every re-detection.
static CURRENT: Mutex<Option<Arc<Jvm>>> = Mutex::new(None);

/// A resolved java installation.
pub struct Jvm {
    layout: InstallationLayout,
    version: JavaVersion,
    vendor: Vendor,
    os: Arc<dyn OperatingSystem>,
    java_executable: PathBuf,
}

/// Lightweight facade over a JRE directory (embedded or standalone peer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jre {
    home: PathBuf,
}

impl Jre {
    pub fn home_dir(&self) -> &Path {
        &self.home
    }
}

impl Jvm {
    /// The JVM this process is configured against, detected once and cached
    /// for the process lifetime. Repeated calls return the identical
    /// instance until [`reset_current`](Self::reset_current) is invoked.
    pub fn current() -> Result<Arc<Jvm>> {
        let mut cached = lock_current();
        if let Some(jvm) = cached.as_ref() {
            return Ok(Arc::clone(jvm));
        }
        let os: Arc<dyn OperatingSystem> = Arc::new(HostOs::new());
        let snapshot = JavaSnapshot::from_env(os.as_ref())?;
        let jvm = Arc::new(Self::from_snapshot(&snapshot, os)?);
        debug!(jvm = %jvm, "detected current JVM");
        *cached = Some(Arc::clone(&jvm));
        Ok(jvm)
    }

    /// Drop the cached current JVM so the next [`current`](Self::current)
    /// call re-detects from the live environment. Intended for test
    /// isolation; production callers have no reason to invalidate.
    pub fn reset_current() {
        *lock_current() = None;
    }

    /// Resolve an explicitly supplied home directory on the real host,
    /// taking version and vendor from the ambient environment.
    pub fn for_home(path: impl Into<PathBuf>) -> Result<Jvm> {
        Self::from_snapshot(&JavaSnapshot::for_home(path), Arc::new(HostOs::new()))
    }

    /// Resolve a configuration snapshot against a given OS. Pure with
    /// respect to ambient state; this is the constructor everything else
    /// funnels through.
    pub fn from_snapshot(snapshot: &JavaSnapshot, os: Arc<dyn OperatingSystem>) -> Result<Jvm> {
        let layout = classify(&snapshot.java_home, &snapshot.version, os.as_ref())?;
        let java_executable = locate_in_home(&layout.java_home, "java", os.as_ref())?;
        Ok(Jvm {
            layout,
            version: snapshot.version.clone(),
            vendor: Vendor::from_vendor_string(&snapshot.vendor),
            os,
            java_executable,
        })
    }

    /// Resolved installation root. For an embedded JRE home this is the
    /// owning JDK; for a Windows versioned JRE it is the JDK sibling.
    pub fn java_home(&self) -> &Path {
        &self.layout.java_home
    }

    pub fn kind(&self) -> InstallationKind {
        self.layout.kind
    }

    pub fn java_version(&self) -> &JavaVersion {
        &self.version
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn is_ibm(&self) -> bool {
        self.vendor.is_ibm()
    }

    /// `lib/tools.jar` as the active vendor exposes it, `None` for
    /// standalone JREs, Apple legacy JVMs and anything from Java 9 on.
    pub fn tools_jar(&self) -> Option<PathBuf> {
        self.vendor.tools_jar(self.layout.tools_jar.as_deref())
    }

    /// The JRE bundled inside this JDK, when the layout carries one.
    pub fn jre(&self) -> Option<Jre> {
        self.layout
            .embedded_jre_home
            .clone()
            .map(|home| Jre { home })
    }

    /// The standalone JRE associated with this installation: the Windows
    /// versioned sibling when one was found, or the installation itself
    /// when it *is* a standalone JRE. Gone from Java 9 on.
    pub fn standalone_jre(&self) -> Option<Jre> {
        if self.version.is_java9_compatible() {
            return None;
        }
        match self.layout.kind {
            InstallationKind::StandaloneJre => Some(Jre {
                home: self.layout.java_home.clone(),
            }),
            _ => self
                .layout
                .peer_jre_home
                .clone()
                .map(|home| Jre { home }),
        }
    }

    /// The primary `java` executable, located strictly at construction.
    pub fn java_executable(&self) -> &Path {
        &self.java_executable
    }

    pub fn javac_executable(&self) -> PathBuf {
        self.executable("javac")
    }

    pub fn javadoc_executable(&self) -> PathBuf {
        self.executable("javadoc")
    }

    /// Locate a named tool with the degrading fallback chain: home `bin/`,
    /// PATH, bare suffixed name. Never fails; a caller invoking the final
    /// fallback owns the not-found handling at execution time.
    pub fn executable(&self, name: &str) -> PathBuf {
        let exe_name = self.os.executable_name(name);
        let in_home = self.layout.java_home.join("bin").join(&exe_name);
        if in_home.is_file() {
            return in_home;
        }
        if let Some(on_path) = self.os.find_in_path(&exe_name) {
            debug!(name = exe_name, found = %on_path.display(), "tool resolved via PATH");
            return on_path;
        }
        debug!(name = exe_name, "tool not found; degrading to bare name");
        PathBuf::from(exe_name)
    }

    /// Strict lookup inside `java_home/bin`, failing with a
    /// [`JvmScoutError::JavaHome`] that names the executable and the home.
    /// This is the fail-fast half of the lookup contract; prefer
    /// [`executable`](Self::executable) unless the tool is load-bearing.
    pub fn executable_in_home(&self, name: &str) -> Result<PathBuf> {
        locate_in_home(&self.layout.java_home, name, self.os.as_ref())
    }

    /// Environment variables a forked java process may inherit. Identity
    /// for most vendors; Apple launcher variables are stripped because the
    /// legacy Apple launcher injects per-app entries that confuse children.
    pub fn inheritable_environment(
        &self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> HashMap<String, String> {
        vars.into_iter()
            .filter(|(name, _)| {
                !(self.vendor.filters_launcher_env() && is_apple_launcher_var(name))
            })
            .collect()
    }
}

fn lock_current() -> std::sync::MutexGuard<'static, Option<Arc<Jvm>>> {
    CURRENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn locate_in_home(home: &Path, name: &str, os: &dyn OperatingSystem) -> Result<PathBuf> {
    let exe_name = os.executable_name(name);
    let candidate = home.join("bin").join(&exe_name);
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(JvmScoutError::JavaHome {
            executable: name.to_string(),
            home: home.to_path_buf(),
        })
    }
}

impl fmt::Display for Jvm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.layout.java_home.display())
    }
}

impl fmt::Debug for Jvm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jvm")
            .field("java_home", &self.layout.java_home)
            .field("kind", &self.layout.kind)
            .field("version", &self.version)
            .field("vendor", &self.vendor)
            .finish()
    }
}

/// Two models pointing at the same home are interchangeable, whatever path
/// constructed them.
impl PartialEq for Jvm {
    fn eq(&self, other: &Self) -> bool {
        self.layout.java_home == other.layout.java_home
    }
}

impl Eq for Jvm {}

impl Hash for Jvm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.layout.java_home.hash(state);
    }
}
