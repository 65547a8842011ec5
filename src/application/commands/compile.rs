//! `arduino-cli compile`

use std::path::{Path, PathBuf};

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

/// Everything `compile` accepts besides the sketch path.
///
/// Booleans emit their flag only when true; unset options are omitted.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub fqbn: Option<String>,
    pub build_cache_path: Option<PathBuf>,
    pub build_path: Option<PathBuf>,
    /// `key=value`, one `--build-property` each
    pub build_properties: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub port: Option<String>,
    pub programmer: Option<String>,
    pub verify: bool,
    /// `none`, `default`, `more` or `all`
    pub warnings: Option<String>,
    pub export_binaries: bool,
    /// Library folders, comma-joined into `--libraries`
    pub libraries: Vec<String>,
    /// Single library folders, comma-joined into `--library`
    pub library: Vec<String>,
    pub optimize_for_debug: bool,
    pub preprocess: bool,
    pub show_properties: Option<String>,
    pub clean: bool,
    pub only_compilation_database: bool,
    pub discovery_timeout: Option<String>,
    pub protocol: Option<String>,
    /// `key=value`, one `--board-options` each
    pub board_options: Vec<String>,
    pub profile: Option<String>,
    pub jobs: Option<u32>,
    pub quiet: bool,
    /// Upload after a successful build
    pub upload: bool,
    pub encrypt_key: Option<String>,
    pub keys_keychain: Option<PathBuf>,
    pub sign_key: Option<String>,
    pub dump_profile: bool,
}

#[derive(Debug, Clone)]
pub struct CompileCommand {
    base: CommandBase,
}

impl CompileCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::COMPILE),
        }
    }

    /// Compile `sketch` (or the current directory when `None`).
    pub fn run(
        &self,
        sketch: Option<&Path>,
        options: &CompileOptions,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(Self::build_args(sketch, options))
    }

    fn build_args(sketch: Option<&Path>, o: &CompileOptions) -> ArgList {
        ArgList::new()
            .opt_path(flags::BUILD_CACHE_PATH, o.build_cache_path.as_deref())
            .opt_path(flags::BUILD_PATH, o.build_path.as_deref())
            .repeated(flags::BUILD_PROPERTY, &o.build_properties)
            .opt(flags::FQBN, o.fqbn.as_deref())
            .opt_path(flags::OUTPUT_DIR, o.output_dir.as_deref())
            .opt(flags::PORT, o.port.as_deref())
            .opt(flags::PROGRAMMER, o.programmer.as_deref())
            .flag(flags::VERIFY, o.verify)
            .opt(flags::WARNINGS, o.warnings.as_deref())
            .flag(flags::EXPORT_BINARIES, o.export_binaries)
            .joined(flags::LIBRARIES, &o.libraries)
            .joined(flags::LIBRARY, &o.library)
            .flag(flags::OPTIMIZE_FOR_DEBUG, o.optimize_for_debug)
            .flag(flags::PREPROCESS, o.preprocess)
            .opt(flags::SHOW_PROPERTIES, o.show_properties.as_deref())
            .flag(flags::CLEAN_FLAG, o.clean)
            .flag(flags::ONLY_COMPILATION_DATABASE, o.only_compilation_database)
            .opt(flags::DISCOVERY_TIMEOUT, o.discovery_timeout.as_deref())
            .opt(flags::PROTOCOL, o.protocol.as_deref())
            .repeated(flags::BOARD_OPTIONS, &o.board_options)
            .opt(flags::PROFILE, o.profile.as_deref())
            .opt_display(flags::JOBS, o.jobs)
            .flag(flags::QUIET, o.quiet)
            .flag(flags::UPLOAD_FLAG, o.upload)
            .opt(flags::ENCRYPT_KEY, o.encrypt_key.as_deref())
            .opt_path(flags::KEYS_KEYCHAIN, o.keys_keychain.as_deref())
            .opt(flags::SIGN_KEY, o.sign_key.as_deref())
            .flag(flags::DUMP_PROFILE, o.dump_profile)
            .path_opt(sketch)
    }
}
