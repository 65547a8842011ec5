//! `arduino-cli config`
//!
//! Reads and writes arduino-cli's own YAML configuration, not the settings
//! of this crate (see [`crate::config`]).

use std::path::Path;

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct ConfigCommand {
    base: CommandBase,
}

impl ConfigCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::CONFIG),
        }
    }

    /// Append values to a list setting.
    pub fn add(&self, setting: &str, values: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::with(flags::ADD).arg(setting).args(values))
    }

    /// Delete a setting and its sub-keys.
    pub fn delete(&self, setting: &str) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::DELETE).arg(setting))
    }

    /// The effective configuration.
    pub fn dump(&self) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::DUMP))
    }

    pub fn get(&self, setting: &str) -> ApplicationResult<InvocationResult> {
        self.base.exec(ArgList::with(flags::GET).arg(setting))
    }

    /// Write a configuration file with the current settings.
    pub fn init(
        &self,
        dest_dir: Option<&Path>,
        dest_file: Option<&Path>,
        overwrite: bool,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::INIT)
                .opt_path(flags::DEST_DIR, dest_dir)
                .opt_path(flags::DEST_FILE, dest_file)
                .flag(flags::OVERWRITE, overwrite),
        )
    }

    /// Remove values from a list setting.
    pub fn remove(&self, setting: &str, values: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::with(flags::REMOVE).arg(setting).args(values))
    }

    /// Set a setting; several values make a list.
    pub fn set(&self, setting: &str, values: &[&str]) -> ApplicationResult<InvocationResult> {
        self.base
            .exec(ArgList::with(flags::SET).arg(setting).args(values))
    }
}
