//! `arduino-cli monitor`
//!
//! Only `describe` returns on its own; an open monitor blocks until the
//! port closes.

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone, Default)]
pub struct MonitorOptions {
    pub port: Option<String>,
    pub fqbn: Option<String>,
    /// `key=value` port settings, e.g. `baudrate=115200`
    pub config: Vec<String>,
    pub describe: bool,
    pub discovery_timeout: Option<String>,
    pub protocol: Option<String>,
    pub quiet: bool,
    pub timestamp: bool,
    pub raw: bool,
}

#[derive(Debug, Clone)]
pub struct MonitorCommand {
    base: CommandBase,
}

impl MonitorCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::MONITOR),
        }
    }

    pub fn run(&self, options: &MonitorOptions) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::new()
                .opt(flags::PORT, options.port.as_deref())
                .opt(flags::FQBN, options.fqbn.as_deref())
                .repeated(flags::CONFIG_FLAG, &options.config)
                .flag(flags::DESCRIBE, options.describe)
                .opt(flags::DISCOVERY_TIMEOUT, options.discovery_timeout.as_deref())
                .opt(flags::PROTOCOL, options.protocol.as_deref())
                .flag(flags::QUIET, options.quiet)
                .flag(flags::TIMESTAMP, options.timestamp)
                .flag(flags::RAW, options.raw),
        )
    }
}
