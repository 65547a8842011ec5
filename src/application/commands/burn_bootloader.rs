//! `arduino-cli burn-bootloader`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone, Default)]
pub struct BurnBootloaderOptions {
    pub fqbn: Option<String>,
    pub port: Option<String>,
    pub programmer: Option<String>,
    pub verify: bool,
    pub discovery_timeout: Option<String>,
    pub protocol: Option<String>,
    /// `key=value` board options
    pub board_options: Vec<String>,
    /// `key=value` upload properties
    pub upload_properties: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BurnBootloaderCommand {
    base: CommandBase,
}

impl BurnBootloaderCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::BURN_BOOTLOADER),
        }
    }

    pub fn run(&self, options: &BurnBootloaderOptions) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::new()
                .opt(flags::FQBN, options.fqbn.as_deref())
                .opt(flags::PORT, options.port.as_deref())
                .opt(flags::PROGRAMMER, options.programmer.as_deref())
                .flag(flags::VERIFY, options.verify)
                .opt(flags::DISCOVERY_TIMEOUT, options.discovery_timeout.as_deref())
                .opt(flags::PROTOCOL, options.protocol.as_deref())
                .repeated(flags::BOARD_OPTIONS, &options.board_options)
                .repeated(flags::UPLOAD_PROPERTY, &options.upload_properties),
        )
    }
}
