//! Scriptable OS double for layout tests.
//!
//! Classification rules branch on the host family and on PATH contents,
//! neither of which a test should depend on. `MockOs` fixes both: pick a
//! family, register PATH directories explicitly.

use std::path::{Path, PathBuf};

use super::OperatingSystem;

/// An `OperatingSystem` with a fixed family and an explicit PATH.
#[derive(Debug, Clone, Default)]
pub struct MockOs {
    windows: bool,
    path_dirs: Vec<PathBuf>,
}

impl MockOs {
    /// A Unix-family host with an empty PATH.
    pub fn unix() -> Self {
        Self {
            windows: false,
            path_dirs: Vec::new(),
        }
    }

    /// A Windows-family host with an empty PATH.
    pub fn windows() -> Self {
        Self {
            windows: true,
            path_dirs: Vec::new(),
        }
    }

    /// Add a directory to the simulated PATH.
    pub fn with_path_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.path_dirs.push(dir.as_ref().to_path_buf());
        self
    }
}

impl OperatingSystem for MockOs {
    fn executable_name(&self, base: &str) -> String {
        if self.windows && !base.ends_with(".exe") {
            format!("{base}.exe")
        } else {
            base.to_string()
        }
    }

    fn is_windows_family(&self) -> bool {
        self.windows
    }

    fn find_in_path(&self, name: &str) -> Option<PathBuf> {
        self.path_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unix_mock_leaves_names_unsuffixed() {
        let os = MockOs::unix();
        assert_eq!(os.executable_name("javac"), "javac");
        assert!(!os.is_windows_family());
    }

    #[test]
    fn windows_mock_appends_exe() {
        let os = MockOs::windows();
        assert_eq!(os.executable_name("javac"), "javac.exe");
        assert!(os.is_windows_family());
    }

    #[test]
    fn find_in_path_searches_registered_dirs_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("jar"), "").unwrap();

        let os = MockOs::unix()
            .with_path_dir(first.path())
            .with_path_dir(second.path());

        assert_eq!(os.find_in_path("jar"), Some(second.path().join("jar")));
        assert!(os.find_in_path("jlink").is_none());
    }
}
