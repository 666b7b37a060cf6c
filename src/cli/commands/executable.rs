//! The `executable` command: resolve a named java tool.

use std::sync::Arc;

use crate::cli::args::ExecutableArgs;
use crate::jvm::Jvm;

use super::dispatcher::{Command, CommandResult};

/// The executable command implementation.
///
/// Default mode uses the degrading fallback chain, so the command always
/// prints *something* invokable; `--strict` applies the fail-fast contract
/// normally reserved for the primary `java` executable.
pub struct ExecutableCommand {
    jvm: Arc<Jvm>,
    args: ExecutableArgs,
}

impl ExecutableCommand {
    pub fn new(jvm: Arc<Jvm>, args: ExecutableArgs) -> Self {
        Self { jvm, args }
    }
}

impl Command for ExecutableCommand {
    fn execute(&self) -> crate::error::Result<CommandResult> {
        let path = if self.args.strict {
            self.jvm.executable_in_home(&self.args.name)?
        } else {
            self.jvm.executable(&self.args.name)
        };
        println!("{}", path.display());
        Ok(CommandResult::success())
    }
}
