//! `arduino-cli version`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct VersionCommand {
    base: CommandBase,
}

impl VersionCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::VERSION),
        }
    }

    pub fn run(&self) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::new())
    }
}
