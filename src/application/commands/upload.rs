//! `arduino-cli upload`

use std::path::{Path, PathBuf};

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub fqbn: Option<String>,
    pub input_dir: Option<PathBuf>,
    pub input_file: Option<PathBuf>,
    pub port: Option<String>,
    pub programmer: Option<String>,
    pub verify: bool,
    pub discovery_timeout: Option<String>,
    pub protocol: Option<String>,
    pub board_options: Vec<String>,
    pub profile: Option<String>,
    /// `key=value` upload properties
    pub upload_properties: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UploadCommand {
    base: CommandBase,
}

impl UploadCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::UPLOAD),
        }
    }

    /// Upload the compiled `sketch` (or the current directory when `None`).
    pub fn run(
        &self,
        sketch: Option<&Path>,
        options: &UploadOptions,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::new()
                .opt(flags::FQBN, options.fqbn.as_deref())
                .opt_path(flags::INPUT_DIR, options.input_dir.as_deref())
                .opt_path(flags::INPUT_FILE, options.input_file.as_deref())
                .opt(flags::PORT, options.port.as_deref())
                .opt(flags::PROGRAMMER, options.programmer.as_deref())
                .flag(flags::VERIFY, options.verify)
                .opt(flags::DISCOVERY_TIMEOUT, options.discovery_timeout.as_deref())
                .opt(flags::PROTOCOL, options.protocol.as_deref())
                .repeated(flags::BOARD_OPTIONS, &options.board_options)
                .opt(flags::PROFILE, options.profile.as_deref())
                .repeated(flags::UPLOAD_PROPERTY, &options.upload_properties)
                .path_opt(sketch),
        )
    }
}
