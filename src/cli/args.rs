//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// jvmscout - Java installation discovery and resolution.
#[derive(Debug, Parser)]
#[command(name = "jvmscout")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Resolve this java home instead of the ambient configuration
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved JVM (default if no command specified)
    Inspect(InspectArgs),

    /// Print the path a named java tool resolves to
    Executable(ExecutableArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InspectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `executable` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecutableArgs {
    /// Tool name without platform suffix (e.g. javac, jar, jlink)
    pub name: String,

    /// Fail instead of degrading when the tool is not in the home's bin/
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn home_flag_is_global() {
        let cli = Cli::parse_from(["jvmscout", "executable", "javac", "--home", "/opt/jdk"]);
        assert_eq!(cli.home, Some(PathBuf::from("/opt/jdk")));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["jvmscout"]);
        assert!(cli.command.is_none());
    }
}
