//! `arduino-cli sketch`

use std::path::Path;

use crate::application::executor::CommandBase;
use crate::application::ApplicationResult;
use crate::domain::{flags, ArgList, InvocationResult};

#[derive(Debug, Clone)]
pub struct SketchCommand {
    base: CommandBase,
}

impl SketchCommand {
    pub fn new(base: &CommandBase) -> Self {
        Self {
            base: base.with_subcommand(flags::SKETCH),
        }
    }

    /// Zip `sketch_path` into `archive_path` (default: next to the sketch).
    pub fn archive(
        &self,
        sketch_path: &Path,
        archive_path: Option<&Path>,
        include_build_dir: bool,
        overwrite: bool,
    ) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::ARCHIVE)
                .path(sketch_path)
                .path_opt(archive_path)
                .flag(flags::INCLUDE_BUILD_DIR, include_build_dir)
                .flag(flags::OVERWRITE, overwrite),
        )
    }

    /// Create a new sketch named (or located at) `name`.
    pub fn new_sketch(&self, name: &str, overwrite: bool) -> ApplicationResult<InvocationResult> {
        self.base.exec(
            ArgList::with(flags::NEW)
                .arg(name)
                .flag(flags::OVERWRITE, overwrite),
        )
    }
}
