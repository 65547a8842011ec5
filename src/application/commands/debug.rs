//! `arduino-cli debug`

use std::path::{Path, PathBuf};

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone, Default)]
pub struct DebugOptions {
    pub fqbn: Option<String>,
    pub port: Option<String>,
    pub programmer: Option<String>,
    pub input_dir: Option<PathBuf>,
    /// Debug interpreter, e.g. `console` or `mi2`
    pub interpreter: Option<String>,
    /// Print debug session info instead of starting one
    pub info: bool,
    pub board_options: Vec<String>,
    pub profile: Option<String>,
    pub discovery_timeout: Option<String>,
    pub protocol: Option<String>,
}

impl DebugOptions {
    fn args(&self, list: ArgList) -> ArgList {
        list.opt(flags::FQBN, self.fqbn.as_deref())
            .opt(flags::PORT, self.port.as_deref())
            .opt(flags::PROGRAMMER, self.programmer.as_deref())
            .opt_path(flags::INPUT_DIR, self.input_dir.as_deref())
            .opt(flags::INTERPRETER, self.interpreter.as_deref())
            .flag(flags::INFO, self.info)
            .repeated(flags::BOARD_OPTIONS, &self.board_options)
            .opt(flags::PROFILE, self.profile.as_deref())
            .opt(flags::DISCOVERY_TIMEOUT, self.discovery_timeout.as_deref())
            .opt(flags::PROTOCOL, self.protocol.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct DebugCommand {
    base: CommandBase,
}

impl DebugCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::DEBUG),
        }
    }

    /// Start a debug session for `sketch`.
    pub fn run(
        &self,
        sketch: Option<&Path>,
        options: &DebugOptions,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(options.args(ArgList::new()).path_opt(sketch))
    }

    /// Whether debugging is supported for the given board/programmer.
    pub fn check(&self, options: &DebugOptions) -> ApplicationResult<InvocationResult> {
        self.base.exec(options.args(ArgList::with(flags::CHECK)))
    }
}
