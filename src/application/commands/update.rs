//! `arduino-cli update`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct UpdateCommand {
    base: CommandBase,
}

impl UpdateCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::UPDATE),
        }
    }

    /// Refresh the platform and library indexes.
    pub fn run(&self, show_outdated: bool) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::new().flag(flags::SHOW_OUTDATED, show_outdated))
    }
}
