//! Tests for Installer and ExecutableLocator
//!
//! All I/O goes through recording mocks: nothing touches the network or the disk.

use std::collections::HashSet;
use std::io;
use std::process::Output;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use duinocli::application::services::{
    install_script_command, ExecutableLocator, Installer, INSTALL_SCRIPT_URL, WINDOWS_ARCHIVE_URL,
};
use duinocli::application::ApplicationError;
use duinocli::domain::{DomainError, InstallLayout, Platform};
use duinocli::infrastructure::traits::{CommandRunner, Extractor, FileSystem, HttpClient};
use duinocli::util::testing::RecordingRunner;

/// Filesystem that knows a fixed set of files and directories and records mutations
#[derive(Default)]
struct MockFs {
    files: Mutex<HashSet<PathBuf>>,
    dirs: Mutex<HashSet<PathBuf>>,
    created: Mutex<Vec<PathBuf>>,
    removed: Mutex<Vec<PathBuf>>,
}

impl MockFs {
    fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.files.lock().unwrap().insert(path.into());
        self
    }

    fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(path.into());
        self
    }

    fn created(&self) -> Vec<PathBuf> {
        self.created.lock().unwrap().clone()
    }

    fn removed(&self) -> Vec<PathBuf> {
        self.removed.lock().unwrap().clone()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        self.created.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.files.lock().unwrap().remove(path);
        self.removed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// HTTP client that records requested URLs
#[derive(Default)]
struct MockHttp {
    downloads: Mutex<Vec<(String, PathBuf)>>,
    should_fail: bool,
}

impl MockHttp {
    fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttp {
    fn download(&self, url: &str, dest: &Path) -> io::Result<u64> {
        self.downloads
            .lock()
            .unwrap()
            .push((url.to_string(), dest.to_path_buf()));
        if self.should_fail {
            return Err(io::Error::new(io::ErrorKind::Other, "connection refused"));
        }
        Ok(42)
    }
}

/// Extractor that records (archive, destination) pairs
#[derive(Default)]
struct MockExtractor {
    extracted: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl MockExtractor {
    fn extracted(&self) -> Vec<(PathBuf, PathBuf)> {
        self.extracted.lock().unwrap().clone()
    }
}

impl Extractor for MockExtractor {
    fn extract_zip(&self, archive: &Path, dest: &Path) -> io::Result<()> {
        self.extracted
            .lock()
            .unwrap()
            .push((archive.to_path_buf(), dest.to_path_buf()));
        Ok(())
    }
}

/// Runner whose successful runs leave `produces` behind, like the install script would
struct ScriptRunner {
    inner: Arc<RecordingRunner>,
    fs: Arc<MockFs>,
    produces: Option<PathBuf>,
}

impl CommandRunner for ScriptRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        let output = self.inner.run(cmd, args)?;
        if let (true, Some(path)) = (output.status.success(), &self.produces) {
            self.fs.files.lock().unwrap().insert(path.clone());
        }
        Ok(output)
    }
}

struct Fixture {
    fs: Arc<MockFs>,
    cmd: Arc<RecordingRunner>,
    http: Arc<MockHttp>,
    extractor: Arc<MockExtractor>,
    produces: Option<PathBuf>,
}

impl Fixture {
    fn new(fs: MockFs, cmd: RecordingRunner, http: MockHttp) -> Self {
        Self {
            fs: Arc::new(fs),
            cmd: Arc::new(cmd),
            http: Arc::new(http),
            extractor: Arc::new(MockExtractor::default()),
            produces: None,
        }
    }

    fn producing(mut self, exe: &str) -> Self {
        self.produces = Some(PathBuf::from(exe));
        self
    }

    fn installer(&self, platform: Platform) -> Installer {
        let runner = ScriptRunner {
            inner: self.cmd.clone(),
            fs: self.fs.clone(),
            produces: self.produces.clone(),
        };
        Installer::new(
            self.fs.clone(),
            Arc::new(runner),
            self.http.clone(),
            self.extractor.clone(),
            platform,
        )
    }

    fn locator(&self, platform: Platform, root: &str) -> ExecutableLocator {
        ExecutableLocator::new(
            self.fs.clone(),
            self.installer(platform),
            InstallLayout::new(root),
        )
    }

    fn assert_no_install_activity(&self) {
        assert!(self.cmd.calls().is_empty(), "unexpected command calls");
        assert!(self.http.downloads().is_empty(), "unexpected downloads");
        assert!(self.extractor.extracted().is_empty(), "unexpected extraction");
        assert!(self.fs.created().is_empty(), "unexpected directory creation");
    }
}

// ============================================================
// Installer
// ============================================================

#[test]
fn given_unix_and_missing_dir_when_install_then_creates_dir_and_runs_script() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::default())
        .producing("/opt/duino/arduino-cli");

    // Act
    let exe = fx
        .installer(Platform::Unix)
        .install(Path::new("/opt/duino"))
        .unwrap();

    // Assert
    assert_eq!(exe, PathBuf::from("/opt/duino/arduino-cli"));
    assert_eq!(fx.fs.created(), vec![PathBuf::from("/opt/duino")]);
    assert_eq!(
        fx.cmd.calls(),
        vec![vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("curl -fsSL {INSTALL_SCRIPT_URL} | BINDIR='/opt/duino' sh"),
        ]]
    );
    assert!(fx.http.downloads().is_empty());
}

#[test]
fn given_existing_dir_when_install_then_dir_not_recreated() {
    // Arrange
    let fx = Fixture::new(
        MockFs::default().with_dir("/opt/duino"),
        RecordingRunner::new(),
        MockHttp::default(),
    )
    .producing("/opt/duino/arduino-cli");

    // Act
    fx.installer(Platform::Unix)
        .install(Path::new("/opt/duino"))
        .unwrap();

    // Assert
    assert!(fx.fs.created().is_empty());
    assert_eq!(fx.cmd.calls().len(), 1);
}

#[test]
fn given_failing_script_when_install_then_install_failed_with_stderr() {
    // Arrange
    let fx = Fixture::new(
        MockFs::default(),
        RecordingRunner::new().respond(22, "", "curl: (22) 404 Not Found\n"),
        MockHttp::default(),
    );

    // Act
    let err = fx
        .installer(Platform::Unix)
        .install(Path::new("/opt/duino"))
        .unwrap_err();

    // Assert
    match err {
        ApplicationError::InstallFailed { message, exit_code } => {
            assert_eq!(message, "curl: (22) 404 Not Found");
            assert_eq!(exit_code, Some(22));
        }
        other => panic!("expected InstallFailed, got {other:?}"),
    }
}

#[test]
fn given_script_exits_zero_without_executable_when_install_then_install_failed() {
    // Arrange: curl failed inside the pipeline, sh saw empty input and exited 0
    let fx = Fixture::new(
        MockFs::default(),
        RecordingRunner::new().respond(0, "", ""),
        MockHttp::default(),
    );

    // Act
    let err = fx
        .installer(Platform::Unix)
        .install(Path::new("/opt/duino"))
        .unwrap_err();

    // Assert
    match err {
        ApplicationError::InstallFailed { message, exit_code } => {
            assert!(message.contains("/opt/duino/arduino-cli"), "message: {message}");
            assert_eq!(exit_code, Some(0));
        }
        other => panic!("expected InstallFailed, got {other:?}"),
    }
    assert_eq!(fx.cmd.calls().len(), 1);
}

#[test]
fn given_script_leaves_no_executable_when_resolve_then_error_not_path() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::default());
    let locator = fx.locator(Platform::Unix, "/opt/duino");

    // Act
    let result = locator.resolve(Path::new("arduino-cli"));

    // Assert
    assert!(matches!(result, Err(ApplicationError::InstallFailed { .. })));
}

#[test]
fn given_windows_when_install_then_downloads_extracts_and_cleans_up() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::default());
    let dir = Path::new("C:/tools/duino");

    // Act
    let exe = fx.installer(Platform::Windows).install(dir).unwrap();

    // Assert
    assert_eq!(exe, dir.join("arduino-cli.exe"));
    assert_eq!(
        fx.http.downloads(),
        vec![(WINDOWS_ARCHIVE_URL.to_string(), dir.join("arduino-cli.zip"))]
    );
    assert_eq!(
        fx.extractor.extracted(),
        vec![(dir.join("arduino-cli.zip"), dir.to_path_buf())]
    );
    assert_eq!(
        fx.fs.removed(),
        vec![dir.join("arduino-cli.zip"), dir.join("LICENSE.txt")]
    );
    assert!(fx.cmd.calls().is_empty());
}

#[test]
fn given_download_failure_when_install_windows_then_error_and_no_extraction() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::failing());

    // Act
    let err = fx
        .installer(Platform::Windows)
        .install(Path::new("C:/tools/duino"))
        .unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(fx.extractor.extracted().is_empty());
    assert!(fx.fs.removed().is_empty());
}

#[test]
fn given_unsupported_platform_when_install_then_fails_before_any_io() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::default());

    // Act
    let err = fx
        .installer(Platform::Other("wasm".into()))
        .install(Path::new("/opt/duino"))
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::UnsupportedPlatform(ref family)) if family == "wasm"
    ));
    fx.assert_no_install_activity();
}

#[test]
fn given_dir_with_space_when_script_command_then_dir_stays_one_word() {
    let cmd = install_script_command(Path::new("/home/me/my tools"));
    assert!(cmd.ends_with("BINDIR='/home/me/my tools' sh"));
}

// ============================================================
// ExecutableLocator
// ============================================================

#[test]
fn given_existing_requested_path_when_resolve_then_returned_unmodified() {
    // Arrange
    let fx = Fixture::new(
        MockFs::default().with_file("./bin/tool"),
        RecordingRunner::new(),
        MockHttp::default(),
    );
    let locator = fx.locator(Platform::Unix, "/opt/duino");

    // Act
    let exe = locator.resolve(Path::new("./bin/tool")).unwrap();

    // Assert
    assert_eq!(exe, PathBuf::from("./bin/tool"));
    fx.assert_no_install_activity();
}

#[test]
fn given_installed_executable_when_resolve_then_uses_it_without_install() {
    // Arrange
    let fx = Fixture::new(
        MockFs::default().with_file("/opt/duino/arduino-cli"),
        RecordingRunner::new(),
        MockHttp::default(),
    );
    let locator = fx.locator(Platform::Unix, "/opt/duino");

    // Act
    let exe = locator.resolve(Path::new("arduino-cli")).unwrap();

    // Assert
    assert_eq!(exe, PathBuf::from("/opt/duino/arduino-cli"));
    fx.assert_no_install_activity();
}

#[test]
fn given_nothing_installed_when_resolve_then_installs_into_layout_root() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::default())
        .producing("/opt/duino/arduino-cli");
    let locator = fx.locator(Platform::Unix, "/opt/duino");

    // Act
    let exe = locator.resolve(Path::new("arduino-cli")).unwrap();

    // Assert
    assert_eq!(exe, PathBuf::from("/opt/duino/arduino-cli"));
    assert_eq!(fx.fs.created(), vec![PathBuf::from("/opt/duino")]);
    let calls = fx.cmd.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0][2].contains("BINDIR='/opt/duino'"));
}

#[test]
fn given_unsupported_platform_and_missing_path_when_resolve_then_error_without_network() {
    // Arrange
    let fx = Fixture::new(MockFs::default(), RecordingRunner::new(), MockHttp::default());
    let locator = fx.locator(Platform::Other("wasm".into()), "/opt/duino");

    // Act
    let result = locator.resolve(Path::new("arduino-cli"));

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::UnsupportedPlatform(_)))
    ));
    fx.assert_no_install_activity();
}

#[test]
fn given_unsupported_platform_but_existing_path_when_resolve_then_path_returned() {
    // Arrange
    let fx = Fixture::new(
        MockFs::default().with_file("/usr/bin/arduino-cli"),
        RecordingRunner::new(),
        MockHttp::default(),
    );
    let locator = fx.locator(Platform::Other("wasm".into()), "/opt/duino");

    // Act
    let exe = locator.resolve(Path::new("/usr/bin/arduino-cli")).unwrap();

    // Assert
    assert_eq!(exe, PathBuf::from("/usr/bin/arduino-cli"));
}
