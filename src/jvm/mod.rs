//! JVM discovery and resolution.
//!
//! The pipeline: capture a [`JavaSnapshot`] of the ambient configuration,
//! run the layout classifier over the claimed home directory, dispatch
//! vendor-specific overrides, and hand back an immutable [`Jvm`] model that
//! answers path queries.

mod layout;
mod model;
mod snapshot;
mod vendor;
mod version;

pub use layout::{classify, InstallationKind, InstallationLayout};
pub use model::{Jre, Jvm};
pub use snapshot::JavaSnapshot;
pub use vendor::Vendor;
pub use version::JavaVersion;
