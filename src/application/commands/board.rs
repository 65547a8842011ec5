//! `arduino-cli board`

use std::path::Path;

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

/// Board discovery, details and sketch attachment.
#[derive(Debug, Clone)]
pub struct BoardCommand {
    base: CommandBase,
}

impl BoardCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::BOARD),
        }
    }

    /// Attach a board (by port and/or FQBN) to a sketch.
    pub fn attach(
        &self,
        port: Option<&str>,
        fqbn: Option<&str>,
        sketch_path: Option<&Path>,
        discovery_timeout: Option<&str>,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::ATTACH)
                .opt(flags::PORT, port)
                .opt(flags::FQBN, fqbn)
                .opt(flags::DISCOVERY_TIMEOUT, discovery_timeout)
                .path_opt(sketch_path),
        )
    }

    /// Details of the board identified by `fqbn`.
    pub fn details(
        &self,
        fqbn: &str,
        full: bool,
        list_programmers: bool,
        board_options: &[&str],
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::DETAILS)
                .opt(flags::FQBN, Some(fqbn))
                .flag(flags::FULL, full)
                .flag(flags::LIST_PROGRAMMERS, list_programmers)
                .repeated(flags::BOARD_OPTIONS, board_options),
        )
    }

    /// Boards connected to this machine.
    pub fn list(
        &self,
        discovery_timeout: Option<&str>,
        fqbn: Option<&str>,
        watch: bool,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::LIST)
                .opt(flags::DISCOVERY_TIMEOUT, discovery_timeout)
                .opt(flags::FQBN, fqbn)
                .flag(flags::WATCH, watch),
        )
    }

    /// Boards of installed platforms, optionally filtered by name.
    pub fn listall(&self, boards: &[&str], show_hidden: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::LISTALL)
                .args(boards)
                .flag(flags::SHOW_HIDDEN, show_hidden),
        )
    }

    /// Boards of all known platforms, installed or not.
    pub fn search(&self, boards: &[&str], show_hidden: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::SEARCH)
                .args(boards)
                .flag(flags::SHOW_HIDDEN, show_hidden),
        )
    }
}
