//! The `inspect` command: render the resolved JVM.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use console::style;
use serde::Serialize;

use crate::cli::args::InspectArgs;
use crate::jvm::{InstallationKind, Jvm};

use super::dispatcher::{Command, CommandResult};

/// The inspect command implementation.
pub struct InspectCommand {
    jvm: Arc<Jvm>,
    args: InspectArgs,
}

/// Flat, serializable view of a resolved [`Jvm`].
#[derive(Debug, Serialize)]
pub struct JvmReport {
    pub java_home: PathBuf,
    pub kind: InstallationKind,
    pub version: String,
    pub vendor: crate::jvm::Vendor,
    pub tools_jar: Option<PathBuf>,
    pub embedded_jre: Option<PathBuf>,
    pub standalone_jre: Option<PathBuf>,
    pub java: PathBuf,
    pub javac: PathBuf,
    pub javadoc: PathBuf,
}

impl From<&Jvm> for JvmReport {
    fn from(jvm: &Jvm) -> Self {
        Self {
            java_home: jvm.java_home().to_path_buf(),
            kind: jvm.kind(),
            version: jvm.java_version().raw().to_string(),
            vendor: jvm.vendor(),
            tools_jar: jvm.tools_jar(),
            embedded_jre: jvm.jre().map(|jre| jre.home_dir().to_path_buf()),
            standalone_jre: jvm
                .standalone_jre()
                .map(|jre| jre.home_dir().to_path_buf()),
            java: jvm.java_executable().to_path_buf(),
            javac: jvm.javac_executable(),
            javadoc: jvm.javadoc_executable(),
        }
    }
}

impl InspectCommand {
    pub fn new(jvm: Arc<Jvm>, args: InspectArgs) -> Self {
        Self { jvm, args }
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> crate::error::Result<CommandResult> {
        let report = JvmReport::from(self.jvm.as_ref());

        if self.args.json {
            let rendered =
                serde_json::to_string_pretty(&report).context("serializing JVM report")?;
            println!("{rendered}");
            return Ok(CommandResult::success());
        }

        let label = |text: &str| style(format!("{text:<16}")).bold();
        let absent = || style("(none)").dim().to_string();
        let opt = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(absent)
        };

        println!(
            "{}{} {}",
            label("Java home:"),
            report.java_home.display(),
            style(format!("[{:?}]", report.kind)).dim()
        );
        println!("{}{}", label("Version:"), report.version);
        println!("{}{:?}", label("Vendor:"), report.vendor);
        println!("{}{}", label("tools.jar:"), opt(&report.tools_jar));
        println!("{}{}", label("Embedded JRE:"), opt(&report.embedded_jre));
        println!(
            "{}{}",
            label("Standalone JRE:"),
            opt(&report.standalone_jre)
        );
        println!("{}{}", label("java:"), report.java.display());
        println!("{}{}", label("javac:"), report.javac.display());
        println!("{}{}", label("javadoc:"), report.javadoc.display());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jvm::JavaSnapshot;
    use crate::sys::MockOs;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn report_serializes_with_stable_field_names() {
        let temp = TempDir::new().unwrap();
        let jdk = temp.path().join("jdk");
        touch(&jdk.join("lib/tools.jar"));
        touch(&jdk.join("bin/java"));

        let jvm = Jvm::from_snapshot(
            &JavaSnapshot::new(&jdk, "1.8.0".parse().unwrap(), ""),
            Arc::new(MockOs::unix()),
        )
        .unwrap();

        let json = serde_json::to_value(JvmReport::from(&jvm)).unwrap();
        assert_eq!(json["kind"], "jdk");
        assert_eq!(json["version"], "1.8.0");
        assert_eq!(json["vendor"], "generic");
        assert!(json["java_home"].as_str().unwrap().ends_with("jdk"));
        assert!(json["tools_jar"].as_str().unwrap().ends_with("tools.jar"));
        assert!(json["embedded_jre"].is_null());
        assert!(json["standalone_jre"].is_null());
    }
}
