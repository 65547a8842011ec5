//! `arduino-cli upgrade`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct UpgradeCommand {
    base: CommandBase,
}

impl UpgradeCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::UPGRADE),
        }
    }

    /// Upgrade every installed platform and library.
    pub fn run(
        &self,
        run_post_install: bool,
        skip_post_install: bool,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::new()
                .flag(flags::RUN_POST_INSTALL, run_post_install)
                .flag(flags::SKIP_POST_INSTALL, skip_post_install),
        )
    }
}
