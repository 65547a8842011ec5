//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;
use std::process::Output;

use tracing::debug;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments to completion, capturing stdout and stderr.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;
}

/// HTTP download abstraction.
pub trait HttpClient: Send + Sync {
    /// GET `url` and write the body to `dest`. Returns the number of bytes written.
    fn download(&self, url: &str, dest: &Path) -> io::Result<u64>;
}

/// Archive extraction abstraction.
pub trait Extractor: Send + Sync {
    /// Extract every entry of the zip archive at `archive` into `dest`.
    fn extract_zip(&self, archive: &Path, dest: &Path) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }
}

/// Blocking HTTP client backed by reqwest.
#[derive(Debug, Default)]
pub struct ReqwestHttpClient;

impl HttpClient for ReqwestHttpClient {
    fn download(&self, url: &str, dest: &Path) -> io::Result<u64> {
        debug!("download: url={}, dest={}", url, dest.display());
        let mut response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        let mut file = std::fs::File::create(dest)?;
        let written = response
            .copy_to(&mut file)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        debug!("download: wrote {} bytes", written);
        Ok(written)
    }
}

/// Zip extraction backed by the zip crate.
#[derive(Debug, Default)]
pub struct ZipExtractor;

impl Extractor for ZipExtractor {
    fn extract_zip(&self, archive: &Path, dest: &Path) -> io::Result<()> {
        let file = std::fs::File::open(archive)?;
        let mut zip = zip::ZipArchive::new(file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        debug!(
            "extract_zip: {} entries from {} into {}",
            zip.len(),
            archive.display(),
            dest.display()
        );
        zip.extract(dest)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
