//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ExecutableLocator, Installer};
use crate::application::{ApplicationResult, ArduinoCli};
use crate::config::Settings;
use crate::domain::Platform;
use crate::infrastructure::traits::{
    CommandRunner, Extractor, FileSystem, HttpClient, RealCommandRunner, RealFileSystem,
    ReqwestHttpClient, ZipExtractor,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction (installer script and arduino-cli itself)
    pub cmd: Arc<dyn CommandRunner>,

    /// Release archive download
    pub http: Arc<dyn HttpClient>,

    /// Release archive extraction
    pub extractor: Arc<dyn Extractor>,

    /// Platform the installer targets
    pub platform: Platform,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            Arc::new(ReqwestHttpClient),
            Arc::new(ZipExtractor),
            Platform::current(),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        http: Arc<dyn HttpClient>,
        extractor: Arc<dyn Extractor>,
        platform: Platform,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            http,
            extractor,
            platform,
        }
    }

    pub fn installer(&self) -> Installer {
        Installer::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.cmd),
            Arc::clone(&self.http),
            Arc::clone(&self.extractor),
            self.platform.clone(),
        )
    }

    pub fn locator(&self) -> ExecutableLocator {
        ExecutableLocator::new(Arc::clone(&self.fs), self.installer(), self.settings.layout())
    }

    /// Resolve the executable and build the façade registry.
    pub fn arduino_cli(&self) -> ApplicationResult<ArduinoCli> {
        ArduinoCli::bootstrap(
            &self.settings,
            &self.locator(),
            self.fs.as_ref(),
            Arc::clone(&self.cmd),
        )
    }
}
