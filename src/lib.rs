//! jvmscout - locates and models installed Java runtimes and development kits.
//!
//! jvmscout answers one question well: given what this host claims about
//! its java installation, where is the real JDK/JRE and where do its tools
//! live? It untangles JRE-only, JDK, and JDK-embedded-JRE layouts across
//! Unix, Windows versioned directories, and macOS bundles, and exposes a
//! stable [`Jvm`](jvm::Jvm) model the rest of a build pipeline can query.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and report rendering
//! - [`error`] - Error types and result aliases
//! - [`jvm`] - Layout classification, vendor dispatch, the resolved model
//! - [`sys`] - Operating-system abstraction (suffixing, PATH search)
//!
//! # Example
//!
//! ```no_run
//! use jvmscout::jvm::Jvm;
//!
//! let jvm = Jvm::for_home("/usr/lib/jvm/java-17-openjdk")?;
//! println!("compiling with {}", jvm.javac_executable().display());
//! # Ok::<(), jvmscout::JvmScoutError>(())
//! ```

pub mod cli;
pub mod error;
pub mod jvm;
pub mod sys;

pub use error::{JvmScoutError, Result};
