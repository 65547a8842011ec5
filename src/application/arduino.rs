//! Registry of every subcommand façade over one resolved executable

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::commands::{
    BoardCommand, BurnBootloaderCommand, CacheCommand, CompileCommand, CompletionCommand,
    ConfigCommand, CoreCommand, DaemonCommand, DebugCommand, LibCommand, MonitorCommand,
    OutdatedCommand, SketchCommand, UpdateCommand, UpgradeCommand, UploadCommand, VersionCommand,
};
use crate::application::executor::CommandBase;
use crate::application::services::ExecutableLocator;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{flags, BaseArgs, BaseArgsBuilder, InstallLayout, InvocationResult};
use crate::infrastructure::traits::{CommandRunner, FileSystem};

/// Entry point to arduino-cli.
///
/// Built once; the base argument vector and all façades are fixed at
/// construction and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ArduinoCli {
    executable: PathBuf,
    base: CommandBase,
    board: BoardCommand,
    burn_bootloader: BurnBootloaderCommand,
    cache: CacheCommand,
    compile: CompileCommand,
    completion: CompletionCommand,
    config: ConfigCommand,
    core: CoreCommand,
    daemon: DaemonCommand,
    debug: DebugCommand,
    lib: LibCommand,
    monitor: MonitorCommand,
    outdated: OutdatedCommand,
    sketch: SketchCommand,
    update: UpdateCommand,
    upgrade: UpgradeCommand,
    upload: UploadCommand,
    version: VersionCommand,
}

impl ArduinoCli {
    /// Resolve `settings.cli_path` (installing if needed) and build the registry.
    pub fn new(
        settings: &Settings,
        locator: &ExecutableLocator,
        runner: Arc<dyn CommandRunner>,
    ) -> ApplicationResult<Self> {
        let executable = locator.resolve(&settings.cli_path)?;
        Ok(Self::with_executable(executable, settings, runner))
    }

    /// Build the registry around an executable that is already known to exist.
    pub fn with_executable(
        executable: impl Into<PathBuf>,
        settings: &Settings,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let executable = executable.into();
        let base_args = BaseArgsBuilder::new(&executable)
            .config_file(settings.config_file.clone())
            .additional_urls(settings.additional_urls.clone())
            .log_file(settings.log_file.clone())
            .log_format(settings.log_format.clone())
            .log_level(settings.log_level.clone())
            .no_color(settings.no_color)
            .build();
        debug!("with_executable: base args {:?}", base_args.as_slice());

        let base = CommandBase::new(base_args, runner);
        Self {
            executable,
            board: BoardCommand::new(&base),
            burn_bootloader: BurnBootloaderCommand::new(&base),
            cache: CacheCommand::new(&base),
            compile: CompileCommand::new(&base),
            completion: CompletionCommand::new(&base),
            config: ConfigCommand::new(&base),
            core: CoreCommand::new(&base),
            daemon: DaemonCommand::new(&base),
            debug: DebugCommand::new(&base),
            lib: LibCommand::new(&base),
            monitor: MonitorCommand::new(&base),
            outdated: OutdatedCommand::new(&base),
            sketch: SketchCommand::new(&base),
            update: UpdateCommand::new(&base),
            upgrade: UpgradeCommand::new(&base),
            upload: UploadCommand::new(&base),
            version: VersionCommand::new(&base),
            base,
        }
    }

    /// [`ArduinoCli::new`], plus directory pinning when `manage_directories` is set.
    ///
    /// Pinning only happens when no arduino-cli config file was configured;
    /// the layout's YAML file is then used as `--config-file`.
    pub fn bootstrap(
        settings: &Settings,
        locator: &ExecutableLocator,
        fs: &dyn FileSystem,
        runner: Arc<dyn CommandRunner>,
    ) -> ApplicationResult<Self> {
        if !settings.manage_directories || settings.config_file.is_some() {
            return Self::new(settings, locator, runner);
        }

        let layout = locator.layout().clone();
        let settings = Settings {
            config_file: Some(layout.config_file()),
            ..settings.clone()
        };
        let cli = Self::new(&settings, locator, runner)?;
        cli.pin_directories(&layout, fs)?;
        Ok(cli)
    }

    /// Point arduino-cli's data and user directories into `layout`.
    ///
    /// Creates the layout's YAML config first when it does not exist yet.
    pub fn pin_directories(
        &self,
        layout: &InstallLayout,
        fs: &dyn FileSystem,
    ) -> ApplicationResult<()> {
        let config_file = layout.config_file();
        if !fs.is_file(&config_file) {
            info!("Creating arduino-cli config {}", config_file.display());
            self.config.init(None, Some(&config_file), false)?;
        }

        let data_dir = path_str(&layout.data_dir());
        let user_dir = path_str(&layout.user_dir());
        self.config.set(flags::KEY_DIRECTORIES_DATA, &[data_dir.as_str()])?;
        self.config.set(flags::KEY_DIRECTORIES_USER, &[user_dir.as_str()])?;
        debug!("pin_directories: pinned under {}", layout.root().display());
        Ok(())
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn base_args(&self) -> &BaseArgs {
        self.base.base_args()
    }

    pub fn board(&self) -> &BoardCommand {
        &self.board
    }

    pub fn burn_bootloader(&self) -> &BurnBootloaderCommand {
        &self.burn_bootloader
    }

    pub fn cache(&self) -> &CacheCommand {
        &self.cache
    }

    pub fn compile(&self) -> &CompileCommand {
        &self.compile
    }

    pub fn completion(&self) -> &CompletionCommand {
        &self.completion
    }

    pub fn config(&self) -> &ConfigCommand {
        &self.config
    }

    pub fn core(&self) -> &CoreCommand {
        &self.core
    }

    pub fn daemon(&self) -> &DaemonCommand {
        &self.daemon
    }

    pub fn debug(&self) -> &DebugCommand {
        &self.debug
    }

    pub fn lib(&self) -> &LibCommand {
        &self.lib
    }

    pub fn monitor(&self) -> &MonitorCommand {
        &self.monitor
    }

    pub fn outdated(&self) -> &OutdatedCommand {
        &self.outdated
    }

    pub fn sketch(&self) -> &SketchCommand {
        &self.sketch
    }

    pub fn update(&self) -> &UpdateCommand {
        &self.update
    }

    pub fn upgrade(&self) -> &UpgradeCommand {
        &self.upgrade
    }

    pub fn upload(&self) -> &UploadCommand {
        &self.upload
    }

    pub fn version(&self) -> &VersionCommand {
        &self.version
    }

    /// Run arbitrary arguments after the base vector, unmodified.
    pub fn exec_raw(&self, args: &[String]) -> ApplicationResult<InvocationResult> {
        self.base.exec(args.to_vec())
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
