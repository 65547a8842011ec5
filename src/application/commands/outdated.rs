//! `arduino-cli outdated`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct OutdatedCommand {
    base: CommandBase,
}

impl OutdatedCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::OUTDATED),
        }
    }

    /// Platforms and libraries that can be upgraded.
    pub fn run(&self) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::new())
    }
}
