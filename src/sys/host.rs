//! Real host implementation of the OS abstraction.

use std::env;
use std::path::PathBuf;

use super::OperatingSystem;

/// The operating system this process is actually running on.
#[derive(Debug, Clone, Default)]
pub struct HostOs;

impl HostOs {
    pub fn new() -> Self {
        Self
    }
}

impl OperatingSystem for HostOs {
    fn executable_name(&self, base: &str) -> String {
        if self.is_windows_family() && !base.ends_with(".exe") {
            format!("{base}.exe")
        } else {
            base.to_string()
        }
    }

    fn is_windows_family(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn find_in_path(&self, name: &str) -> Option<PathBuf> {
        let path_var = env::var_os("PATH")?;
        for dir in env::split_paths(&path_var) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_name_matches_platform() {
        let os = HostOs::new();
        if cfg!(target_os = "windows") {
            assert_eq!(os.executable_name("java"), "java.exe");
        } else {
            assert_eq!(os.executable_name("java"), "java");
        }
    }

    #[test]
    fn executable_name_does_not_double_suffix() {
        let os = HostOs::new();
        let once = os.executable_name("java");
        assert_eq!(os.executable_name(&once), once);
    }

    #[test]
    fn find_in_path_misses_nonexistent_name() {
        let os = HostOs::new();
        assert!(os.find_in_path("no-such-executable-52491").is_none());
    }
}
