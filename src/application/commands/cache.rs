//! `arduino-cli cache`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct CacheCommand {
    base: CommandBase,
}

impl CacheCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::CACHE),
        }
    }

    /// Delete the download cache.
    pub fn clean(&self) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::CLEAN))
    }
}
