//! `arduino-cli completion`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct CompletionCommand {
    base: CommandBase,
}

impl CompletionCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::COMPLETION),
        }
    }

    /// Completion script for `shell` (bash, zsh, fish, powershell); arrives as raw text.
    pub fn run(&self, shell: &str, no_descriptions: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::new()
                .arg(shell)
                .flag(flags::NO_DESCRIPTIONS, no_descriptions),
        )
    }
}
