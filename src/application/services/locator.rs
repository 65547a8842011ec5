//! Executable discovery
//!
//! Resolution order:
//! 1. the caller-supplied path, if it is an existing file (returned unmodified)
//! 2. the platform executable inside the installation directory
//! 3. a fresh install into the installation directory

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::Installer;
use crate::application::ApplicationResult;
use crate::domain::InstallLayout;
use crate::infrastructure::traits::FileSystem;

pub struct ExecutableLocator {
    fs: Arc<dyn FileSystem>,
    installer: Installer,
    layout: InstallLayout,
}

impl ExecutableLocator {
    pub fn new(fs: Arc<dyn FileSystem>, installer: Installer, layout: InstallLayout) -> Self {
        Self {
            fs,
            installer,
            layout,
        }
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    pub fn installer(&self) -> &Installer {
        &self.installer
    }

    /// Resolve `requested` to a usable arduino-cli executable, installing it if necessary.
    pub fn resolve(&self, requested: &Path) -> ApplicationResult<PathBuf> {
        if self.fs.is_file(requested) {
            debug!("resolve: using requested {}", requested.display());
            return Ok(requested.to_path_buf());
        }

        let installed = self.layout.executable(self.installer.platform())?;
        if self.fs.is_file(&installed) {
            debug!("resolve: using installed {}", installed.display());
            return Ok(installed);
        }

        info!(
            "arduino-cli not found at {} or {}, installing",
            requested.display(),
            installed.display()
        );
        self.installer.install(self.layout.root())
    }
}
