//! `arduino-cli daemon`
//!
//! The daemon serves gRPC until killed, so `run` blocks for as long as it does.

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct DaemonCommand {
    base: CommandBase,
}

impl DaemonCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::DAEMON),
        }
    }

    pub fn run(
        &self,
        port: Option<u16>,
        daemonize: bool,
        debug: bool,
        debug_filters: &[&str],
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::new()
                .opt_display(flags::PORT, port)
                .flag(flags::DAEMONIZE, daemonize)
                .flag(flags::DEBUG_FLAG, debug)
                .repeated(flags::DEBUG_FILTER, debug_filters),
        )
    }
}
