//! `arduino-cli lib`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone, Default)]
pub struct LibInstallOptions {
    /// Treat each entry as a git repository URL
    pub git_url: bool,
    /// Treat each entry as a path to a zip archive
    pub zip_path: bool,
    pub no_deps: bool,
    pub no_overwrite: bool,
}

/// Library management.
#[derive(Debug, Clone)]
pub struct LibCommand {
    base: CommandBase,
}

impl LibCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::LIB),
        }
    }

    /// Dependency status of `library` (`name[@version]`).
    pub fn deps(&self, library: &str, no_overwrite: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::DEPS)
                .arg(library)
                .flag(flags::NO_OVERWRITE, no_overwrite),
        )
    }

    pub fn download(&self, libraries: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::with(flags::DOWNLOAD).args(libraries))
    }

    /// Examples of installed libraries, optionally for one library or board.
    pub fn examples(
        &self,
        library: Option<&str>,
        fqbn: Option<&str>,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::EXAMPLES)
                .arg_opt(library)
                .opt(flags::FQBN, fqbn),
        )
    }

    pub fn install(
        &self,
        libraries: &[&str],
        options: &LibInstallOptions,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::INSTALL)
                .args(libraries)
                .flag(flags::GIT_URL, options.git_url)
                .flag(flags::ZIP_PATH, options.zip_path)
                .flag(flags::NO_DEPS, options.no_deps)
                .flag(flags::NO_OVERWRITE, options.no_overwrite),
        )
    }

    pub fn list(
        &self,
        library: Option<&str>,
        all: bool,
        updatable: bool,
        fqbn: Option<&str>,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::LIST)
                .arg_opt(library)
                .flag(flags::ALL, all)
                .flag(flags::UPDATABLE, updatable)
                .opt(flags::FQBN, fqbn),
        )
    }

    pub fn search(
        &self,
        keywords: &[&str],
        names: bool,
        omit_releases_details: bool,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::SEARCH)
                .args(keywords)
                .flag(flags::NAMES, names)
                .flag(flags::OMIT_RELEASES_DETAILS, omit_releases_details),
        )
    }

    pub fn uninstall(&self, libraries: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::with(flags::UNINSTALL).args(libraries))
    }

    pub fn update_index(&self) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::UPDATE_INDEX))
    }

    /// Upgrade the given libraries, or all of them when `libraries` is empty.
    pub fn upgrade(&self, libraries: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::with(flags::UPGRADE).args(libraries))
    }
}
