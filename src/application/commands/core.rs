//! `arduino-cli core`

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone, Default)]
pub struct CoreInstallOptions {
    pub run_post_install: bool,
    pub skip_post_install: bool,
    pub no_overwrite: bool,
}

/// Platform (core) management.
#[derive(Debug, Clone)]
pub struct CoreCommand {
    base: CommandBase,
}

impl CoreCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::CORE),
        }
    }

    /// Download platforms (`vendor:arch[@version]`) without installing them.
    pub fn download(&self, cores: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::DOWNLOAD).args(cores))
    }

    pub fn install(
        &self,
        cores: &[&str],
        options: &CoreInstallOptions,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::INSTALL)
                .args(cores)
                .flag(flags::RUN_POST_INSTALL, options.run_post_install)
                .flag(flags::SKIP_POST_INSTALL, options.skip_post_install)
                .flag(flags::NO_OVERWRITE, options.no_overwrite),
        )
    }

    pub fn list(&self, all: bool, updatable: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::LIST)
                .flag(flags::ALL, all)
                .flag(flags::UPDATABLE, updatable),
        )
    }

    pub fn search(&self, keywords: &[&str], all: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::SEARCH)
                .args(keywords)
                .flag(flags::ALL, all),
        )
    }

    pub fn uninstall(&self, cores: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::UNINSTALL).args(cores))
    }

    pub fn update_index(&self) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::UPDATE_INDEX))
    }

    /// Upgrade the given platforms, or all of them when `cores` is empty.
    pub fn upgrade(
        &self,
        cores: &[&str],
        run_post_install: bool,
        skip_post_install: bool,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::UPGRADE)
                .args(cores)
                .flag(flags::RUN_POST_INSTALL, run_post_install)
                .flag(flags::SKIP_POST_INSTALL, skip_post_install),
        )
    }
}
