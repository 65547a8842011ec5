//! Default installation directory layout
//!
//! ```text
//! <root>/
//!   arduino-cli[.exe]
//!   arduino-cli.yaml
//!   data/
//!   user/
//! ```

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, Platform};

/// Installation directory name used under the platform data directory.
pub const INSTALL_DIR_NAME: &str = "arduino-cli";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the executable for `platform` inside the installation directory.
    pub fn executable(&self, platform: &Platform) -> Result<PathBuf, DomainError> {
        Ok(self.root.join(platform.executable_name()?))
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("arduino-cli.yaml")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn user_dir(&self) -> PathBuf {
        self.root.join("user")
    }
}
