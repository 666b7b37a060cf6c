//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::sync::Arc;

use crate::cli::args::{Cli, Commands, InspectArgs};
use crate::error::Result;
use crate::jvm::Jvm;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command and report success/failure.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// `inspect` is the default when no subcommand is given, matching the
    /// common "what JVM am I on?" invocation.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Inspect(args)) => {
                super::inspect::InspectCommand::new(resolve_jvm(cli)?, args.clone()).execute()
            }
            Some(Commands::Executable(args)) => {
                super::executable::ExecutableCommand::new(resolve_jvm(cli)?, args.clone())
                    .execute()
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute()
            }
            None => {
                super::inspect::InspectCommand::new(resolve_jvm(cli)?, InspectArgs::default())
                    .execute()
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// An explicit `--home` bypasses the process-wide cache entirely; only the
/// ambient resolution is shared.
fn resolve_jvm(cli: &Cli) -> Result<Arc<Jvm>> {
    match &cli.home {
        Some(home) => Ok(Arc::new(Jvm::for_home(home)?)),
        None => Jvm::current(),
    }
}
