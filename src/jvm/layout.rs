//! Installation layout classification.
//!
//! Java installations come in a handful of directory shapes: a bare JRE, a
//! JDK with `lib/tools.jar`, a pre-9 JDK with an embedded `jre/`, the macOS
//! `Contents/Home` bundle, and the Windows convention of versioned sibling
//! directories (`jre6` next to `jdk1.6.0`). Classification is a pure
//! function of existence probes: each shape is an independent rule, the
//! rules run in a fixed order, and the first match wins. Windows sibling
//! resolution runs as a post-step because it can override whatever the
//! path-only rules decided.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{JvmScoutError, Result};
use crate::sys::OperatingSystem;

use super::version::JavaVersion;

/// Which installation shape a home directory matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallationKind {
    /// Runtime only, no compiler toolchain alongside.
    StandaloneJre,

    /// Development kit; `lib/tools.jar` present (pre-9) or modern layout.
    Jdk,

    /// Pre-9 development kit carrying its own `jre/` subdirectory.
    JdkWithEmbeddedJre,

    /// Java 9+ macOS bundle (`.../Contents/Home`); no JRE/JDK split exists.
    MacOsBundleJdk,
}

/// Immutable classification result: the resolved home plus the peer
/// directories the shape implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationLayout {
    pub kind: InstallationKind,

    /// Resolved JDK/JRE root. For an embedded JRE this is the owning JDK,
    /// never the `jre/` directory itself.
    pub java_home: PathBuf,

    /// The `jre/` directory nested inside the JDK, when one exists.
    pub embedded_jre_home: Option<PathBuf>,

    /// Sibling standalone JRE found via the Windows versioned-directory
    /// convention. Absent everywhere else.
    pub peer_jre_home: Option<PathBuf>,

    /// `lib/tools.jar` relative to `java_home`, when present. Always absent
    /// for standalone JREs and from Java 9 on.
    pub tools_jar: Option<PathBuf>,
}

impl InstallationLayout {
    fn bare(kind: InstallationKind, java_home: PathBuf) -> Self {
        Self {
            kind,
            java_home,
            embedded_jre_home: None,
            peer_jre_home: None,
            tools_jar: None,
        }
    }
}

struct RuleCtx<'a> {
    path: &'a Path,
    os: &'a dyn OperatingSystem,
    /// Pre-Java-9: embedded JREs and tools.jar are real discriminators.
    legacy: bool,
}

type Rule = fn(&RuleCtx) -> Option<InstallationLayout>;

/// Shape rules in match order. Keep these independent: each probes the
/// filesystem on its own and builds a complete layout.
const RULES: &[(&str, Rule)] = &[
    ("embedded-jre", rule_embedded_jre),
    ("jdk-tools-jar", rule_jdk_tools_jar),
    ("macos-bundle", rule_macos_bundle),
];

/// Classify an installation directory.
///
/// Fails with [`JvmScoutError::InvalidJavaHome`] when `path` does not exist
/// or is not a directory; this is checked before any rule runs.
pub fn classify(
    path: &Path,
    version: &JavaVersion,
    os: &dyn OperatingSystem,
) -> Result<InstallationLayout> {
    if !path.is_dir() {
        return Err(JvmScoutError::InvalidJavaHome {
            path: path.to_path_buf(),
        });
    }

    let ctx = RuleCtx {
        path,
        os,
        legacy: !version.is_java9_compatible(),
    };

    let mut layout = RULES
        .iter()
        .find_map(|(name, rule)| {
            let matched = rule(&ctx)?;
            debug!(rule = name, home = %matched.java_home.display(), "layout rule matched");
            Some(matched)
        })
        .unwrap_or_else(|| {
            InstallationLayout::bare(InstallationKind::StandaloneJre, path.to_path_buf())
        });

    if ctx.legacy && os.is_windows_family() {
        layout = apply_windows_siblings(layout, version, os);
    }

    Ok(layout)
}

/// Rule 1: the path *is* a JDK's embedded `jre/` directory. Resolution must
/// walk up to the owning JDK.
fn rule_embedded_jre(ctx: &RuleCtx) -> Option<InstallationLayout> {
    if !ctx.legacy || ctx.path.file_name()? != "jre" {
        return None;
    }
    let jdk = ctx.path.parent()?;
    let java = jdk.join("bin").join(ctx.os.executable_name("java"));
    let tools_jar = jdk.join("lib").join("tools.jar");
    if !java.is_file() || !tools_jar.is_file() {
        return None;
    }
    Some(InstallationLayout {
        kind: InstallationKind::JdkWithEmbeddedJre,
        java_home: jdk.to_path_buf(),
        embedded_jre_home: Some(ctx.path.to_path_buf()),
        peer_jre_home: None,
        tools_jar: Some(tools_jar),
    })
}

/// Rule 2: the path's own `lib/tools.jar` marks it a JDK root.
fn rule_jdk_tools_jar(ctx: &RuleCtx) -> Option<InstallationLayout> {
    if !ctx.legacy {
        // Residual tools.jar files are ignored from Java 9 on.
        return None;
    }
    let tools_jar = ctx.path.join("lib").join("tools.jar");
    if !tools_jar.is_file() {
        return None;
    }
    let embedded = ctx.path.join("jre");
    Some(InstallationLayout {
        kind: InstallationKind::Jdk,
        java_home: ctx.path.to_path_buf(),
        embedded_jre_home: looks_like_jre(&embedded, ctx.os).then_some(embedded),
        peer_jre_home: None,
        tools_jar: Some(tools_jar),
    })
}

/// Rule 3: Java 9+ macOS bundle, `.../Contents/Home` with `bin`, `lib` and
/// `conf`. There is no JRE/JDK split to resolve; the home is the JDK.
fn rule_macos_bundle(ctx: &RuleCtx) -> Option<InstallationLayout> {
    if ctx.path.file_name()? != "Home" || ctx.path.parent()?.file_name()? != "Contents" {
        return None;
    }
    let shaped = ["bin", "lib", "conf"]
        .iter()
        .all(|dir| ctx.path.join(dir).is_dir());
    if !shaped || ctx.path.join("jre").is_dir() || ctx.path.join("lib/tools.jar").is_file() {
        return None;
    }
    Some(InstallationLayout::bare(
        InstallationKind::MacOsBundleJdk,
        ctx.path.to_path_buf(),
    ))
}

/// Windows installers drop `jre<version>` and `jdk<version>` next to each
/// other. Given the JRE side, the JDK sibling is authoritative; given the
/// JDK side, the JRE sibling is recorded as a peer. A missing sibling is
/// never an error.
fn apply_windows_siblings(
    layout: InstallationLayout,
    version: &JavaVersion,
    os: &dyn OperatingSystem,
) -> InstallationLayout {
    let versioned_jre = Regex::new(r"^jre\d+$").expect("static pattern");
    let versioned_jdk = Regex::new(r"^jdk\d[\d._]*$").expect("static pattern");

    let name = match layout.java_home.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => return layout,
    };
    let parent = match layout.java_home.parent() {
        Some(parent) => parent.to_path_buf(),
        None => return layout,
    };

    if versioned_jre.is_match(&name) || name == format!("jre{}", version.raw()) {
        let jdk = parent.join(format!("jdk{}", version.raw()));
        let tools_jar = jdk.join("lib").join("tools.jar");
        if tools_jar.is_file() {
            debug!(jdk = %jdk.display(), "versioned JDK sibling overrides JRE home");
            let embedded = jdk.join("jre");
            return InstallationLayout {
                kind: InstallationKind::Jdk,
                peer_jre_home: Some(layout.java_home),
                embedded_jre_home: looks_like_jre(&embedded, os).then_some(embedded),
                tools_jar: Some(tools_jar),
                java_home: jdk,
            };
        }
    } else if versioned_jdk.is_match(&name) && layout.peer_jre_home.is_none() {
        let candidates = [
            parent.join(format!("jre{}", version.major())),
            parent.join(format!("jre{}", version.raw())),
        ];
        if let Some(jre) = candidates.into_iter().find(|dir| dir.is_dir()) {
            debug!(jre = %jre.display(), "recorded versioned JRE sibling");
            return InstallationLayout {
                peer_jre_home: Some(jre),
                ..layout
            };
        }
    }

    layout
}

fn looks_like_jre(dir: &Path, os: &dyn OperatingSystem) -> bool {
    dir.is_dir()
        && (dir.join("bin").join(os.executable_name("java")).is_file() || dir.join("lib").is_dir())
}
