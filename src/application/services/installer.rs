//! arduino-cli bootstrap installation
//!
//! Windows gets the release zip over HTTP, Unix runs the upstream install
//! script. There is no checksum verification, retry, or cleanup of partial
//! downloads: any failure is returned as-is.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{DomainError, Platform};
use crate::infrastructure::traits::{CommandRunner, Extractor, FileSystem, HttpClient};

/// Latest Windows release archive.
pub const WINDOWS_ARCHIVE_URL: &str =
    "https://downloads.arduino.cc/arduino-cli/arduino-cli_latest_Windows_64bit.zip";

/// Upstream install script for Linux and macOS.
pub const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/arduino/arduino-cli/master/install.sh";

const ARCHIVE_NAME: &str = "arduino-cli.zip";
const LICENSE_NAME: &str = "LICENSE.txt";

/// Installs arduino-cli into a directory.
pub struct Installer {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    http: Arc<dyn HttpClient>,
    extractor: Arc<dyn Extractor>,
    platform: Platform,
}

impl Installer {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        http: Arc<dyn HttpClient>,
        extractor: Arc<dyn Extractor>,
        platform: Platform,
    ) -> Self {
        Self {
            fs,
            cmd,
            http,
            extractor,
            platform,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Install into `install_dir` (created if missing) and return the executable path.
    ///
    /// An unsupported platform fails before anything touches the disk or network.
    pub fn install(&self, install_dir: &Path) -> ApplicationResult<PathBuf> {
        match &self.platform {
            Platform::Windows => {
                self.prepare_dir(install_dir)?;
                self.install_from_archive(install_dir)
            }
            Platform::Unix => {
                self.prepare_dir(install_dir)?;
                self.install_from_script(install_dir)
            }
            Platform::Other(family) => {
                Err(DomainError::UnsupportedPlatform(family.clone()).into())
            }
        }
    }

    fn prepare_dir(&self, install_dir: &Path) -> ApplicationResult<()> {
        if self.fs.exists(install_dir) {
            debug!("prepare_dir: {} exists", install_dir.display());
            return Ok(());
        }
        self.fs
            .create_dir_all(install_dir)
            .with_path_context("create install dir", install_dir)
    }

    fn install_from_archive(&self, install_dir: &Path) -> ApplicationResult<PathBuf> {
        info!("Downloading Windows arduino-cli into {}", install_dir.display());
        let archive = install_dir.join(ARCHIVE_NAME);

        self.http
            .download(WINDOWS_ARCHIVE_URL, &archive)
            .with_context(|| format!("download {WINDOWS_ARCHIVE_URL}"))?;
        self.extractor
            .extract_zip(&archive, install_dir)
            .with_path_context("extract archive", &archive)?;

        self.fs
            .remove_file(&archive)
            .with_path_context("remove archive", &archive)?;
        let license = install_dir.join(LICENSE_NAME);
        self.fs
            .remove_file(&license)
            .with_path_context("remove license", &license)?;

        Ok(install_dir.join("arduino-cli.exe"))
    }

    fn install_from_script(&self, install_dir: &Path) -> ApplicationResult<PathBuf> {
        info!("Downloading Mac/Linux arduino-cli into {}", install_dir.display());
        let script = install_script_command(install_dir);
        debug!("install_from_script: sh -c {}", script);

        let output = self
            .cmd
            .run("sh", &["-c", &script])
            .with_context(|| "run install script".to_string())?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::InstallFailed {
                message: stderr.trim().to_string(),
                exit_code: output.status.code(),
            });
        }

        // The pipeline reports sh's status, so a failed curl still exits 0.
        let exe = install_dir.join("arduino-cli");
        if !self.fs.is_file(&exe) {
            return Err(ApplicationError::InstallFailed {
                message: format!("install script produced no executable at {}", exe.display()),
                exit_code: output.status.code(),
            });
        }

        Ok(exe)
    }
}

/// `curl ... | BINDIR=<dir> sh`, with the directory single-quoted for the shell.
pub fn install_script_command(install_dir: &Path) -> String {
    format!(
        "curl -fsSL {} | BINDIR={} sh",
        INSTALL_SCRIPT_URL,
        shell_quote(&install_dir.to_string_lossy())
    )
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_dir_when_script_command_then_quoted_bindir() {
        let cmd = install_script_command(Path::new("/opt/arduino-cli"));
        assert_eq!(
            cmd,
            "curl -fsSL https://raw.githubusercontent.com/arduino/arduino-cli/master/install.sh | BINDIR='/opt/arduino-cli' sh"
        );
    }

    #[test]
    fn given_quote_in_dir_when_shell_quote_then_escaped() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }
}
