//! Error types for jvmscout operations.
//!
//! This module defines [`JvmScoutError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `JvmScoutError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `JvmScoutError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! Resolution failures are deterministic given the filesystem: re-running
//! with the same inputs reproduces the same error, so nothing here is
//! retried. The general executable lookup ([`Jvm::executable`]) never
//! errors at all; it degrades to a bare name instead.
//!
//! [`Jvm::executable`]: crate::jvm::Jvm::executable

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jvmscout operations.
#[derive(Debug, Error)]
pub enum JvmScoutError {
    /// Supplied java home does not exist or is not a directory.
    ///
    /// Raised before any classification logic runs; the path was never a
    /// candidate installation.
    #[error("Invalid java home: {path} does not exist or is not a directory")]
    InvalidJavaHome { path: PathBuf },

    /// The home exists but a required executable is missing inside it.
    ///
    /// Only the primary `java` executable is load-bearing enough to fail
    /// construction; other tools degrade through the lookup fallback chain.
    #[error("Could not find executable '{executable}' in java home {home}")]
    JavaHome { executable: String, home: PathBuf },

    /// Autodetection found neither `JAVA_HOME` nor a `java` on PATH.
    #[error("JAVA_HOME is not set and no java executable was found on PATH")]
    JavaHomeUndetected,

    /// Reported java version string could not be parsed.
    #[error("Unrecognized java version string: {version}")]
    UnrecognizedVersion { version: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for jvmscout operations.
pub type Result<T> = std::result::Result<T, JvmScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_java_home_displays_path() {
        let err = JvmScoutError::InvalidJavaHome {
            path: PathBuf::from("/opt/no-such-jdk"),
        };
        assert!(err.to_string().contains("/opt/no-such-jdk"));
    }

    #[test]
    fn java_home_displays_executable_and_home() {
        let err = JvmScoutError::JavaHome {
            executable: "java".into(),
            home: PathBuf::from("/opt/jdk"),
        };
        let msg = err.to_string();
        assert!(msg.contains("java"));
        assert!(msg.contains("/opt/jdk"));
    }

    #[test]
    fn unrecognized_version_displays_input() {
        let err = JvmScoutError::UnrecognizedVersion {
            version: "not-a-version".into(),
        };
        assert!(err.to_string().contains("not-a-version"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: JvmScoutError = io_err.into();
        assert!(matches!(err, JvmScoutError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(JvmScoutError::JavaHomeUndetected)
        }
        assert!(returns_error().is_err());
    }
}
