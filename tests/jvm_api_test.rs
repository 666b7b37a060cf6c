//! Integration tests for the public library surface.
//!
//! These exercise the discovery pipeline the way an embedding build tool
//! would: explicit snapshots against fake installation trees, with the OS
//! family pinned through `MockOs`.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use jvmscout::jvm::{classify, InstallationKind, JavaSnapshot, JavaVersion, Jvm, Vendor};
use jvmscout::sys::{MockOs, OperatingSystem};
use jvmscout::JvmScoutError;
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn legacy_jdk_tree(root: &Path) -> PathBuf {
    let jdk = root.join("jdk");
    touch(&jdk.join("lib/tools.jar"));
    touch(&jdk.join("bin/java"));
    touch(&jdk.join("bin/javac"));
    touch(&jdk.join("bin/javadoc"));
    touch(&jdk.join("jre/lib/rt.jar"));
    touch(&jdk.join("jre/bin/java"));
    jdk
}

fn jvm(home: &Path, version: &str, os: MockOs) -> Jvm {
    let snapshot = JavaSnapshot::new(home, version.parse().unwrap(), "");
    Jvm::from_snapshot(&snapshot, Arc::new(os)).unwrap()
}

#[test]
fn resolves_jdk_from_embedded_jre_home() {
    let temp = TempDir::new().unwrap();
    let jdk = legacy_jdk_tree(temp.path());

    let resolved = jvm(&jdk.join("jre"), "1.7.0", MockOs::unix());
    assert_eq!(resolved.java_home(), jdk);
    assert_eq!(resolved.kind(), InstallationKind::JdkWithEmbeddedJre);
    assert_eq!(resolved.tools_jar(), Some(jdk.join("lib/tools.jar")));
    assert_eq!(resolved.jre().unwrap().home_dir(), jdk.join("jre"));
    assert_eq!(resolved.javac_executable(), jdk.join("bin/javac"));
}

#[test]
fn windows_versioned_siblings_resolve_to_the_jdk() {
    let temp = TempDir::new().unwrap();
    let jre6 = temp.path().join("jre6");
    touch(&jre6.join("bin/java.exe"));
    let jdk = temp.path().join("jdk1.6.0");
    touch(&jdk.join("lib/tools.jar"));
    touch(&jdk.join("bin/java.exe"));

    let resolved = jvm(&jre6, "1.6.0", MockOs::windows());
    assert_eq!(resolved.java_home(), jdk);
    assert_eq!(resolved.standalone_jre().unwrap().home_dir(), jre6);
    assert_eq!(resolved.java_executable(), jdk.join("bin/java.exe"));
}

#[test]
fn classifier_is_usable_standalone() {
    let temp = TempDir::new().unwrap();
    let jdk = legacy_jdk_tree(temp.path());
    let version: JavaVersion = "1.8.0_292".parse().unwrap();

    let layout = classify(&jdk, &version, &MockOs::unix()).unwrap();
    assert_eq!(layout.kind, InstallationKind::Jdk);
    assert_eq!(layout.java_home, jdk);

    let modern = classify(&jdk, &"11".parse().unwrap(), &MockOs::unix()).unwrap();
    assert_eq!(modern.kind, InstallationKind::StandaloneJre);
    assert_eq!(modern.tools_jar, None);
}

#[test]
fn equality_and_hash_ignore_construction_path() {
    let temp = TempDir::new().unwrap();
    let jdk = legacy_jdk_tree(temp.path());

    let a = jvm(&jdk, "1.7.0", MockOs::unix());
    let b = jvm(&jdk.join("jre"), "1.7.0", MockOs::unix());
    assert_eq!(a, b);

    let hash = |value: &Jvm| {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&a), hash(&b));
}

#[test]
fn vendor_dispatch_shapes_the_model() {
    let temp = TempDir::new().unwrap();
    let jdk = legacy_jdk_tree(temp.path());

    let apple = Jvm::from_snapshot(
        &JavaSnapshot::new(&jdk, "1.6.0".parse().unwrap(), "Apple Inc."),
        Arc::new(MockOs::unix()),
    )
    .unwrap();
    assert_eq!(apple.vendor(), Vendor::Apple);
    assert_eq!(apple.tools_jar(), None);

    let ibm = Jvm::from_snapshot(
        &JavaSnapshot::new(&jdk, "1.6.0".parse().unwrap(), "IBM Corporation"),
        Arc::new(MockOs::unix()),
    )
    .unwrap();
    assert!(ibm.is_ibm());
    assert_eq!(ibm.tools_jar(), Some(jdk.join("lib/tools.jar")));
}

#[test]
fn missing_primary_java_is_a_java_home_error() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("jdk");
    touch(&home.join("lib/tools.jar"));

    let snapshot = JavaSnapshot::new(&home, "1.8.0".parse().unwrap(), "");
    let err = Jvm::from_snapshot(&snapshot, Arc::new(MockOs::unix())).unwrap_err();
    assert!(matches!(err, JvmScoutError::JavaHome { .. }));
    assert!(err.to_string().contains("java"));
}

#[test]
fn os_abstraction_is_swappable() {
    // The trait object boundary the resolver depends on.
    let os: Arc<dyn OperatingSystem> = Arc::new(MockOs::windows());
    assert_eq!(os.executable_name("java"), "java.exe");
    assert!(os.is_windows_family());
}
