//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], keeping global flag handling (`--home`,
//! `--debug`) in one place.

pub mod completions;
pub mod dispatcher;
pub mod executable;
pub mod inspect;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use inspect::JvmReport;
