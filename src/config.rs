//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/duinocli/duinocli.toml`
//! 3. Explicit config: the file passed with `--settings`
//! 4. Environment variables: `DUINOCLI_*` prefix
//! 5. Command-line flags (applied by the binary)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, InstallLayout, INSTALL_DIR_NAME};

const APP_NAME: &str = "duinocli";

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub cli_path: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub additional_urls: Option<Vec<String>>,
    pub log_file: Option<PathBuf>,
    pub log_format: Option<String>,
    pub log_level: Option<String>,
    pub no_color: Option<bool>,
    pub manage_directories: Option<bool>,
}

/// Unified configuration for duinocli.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// arduino-cli executable to try first (default: "arduino-cli")
    pub cli_path: PathBuf,
    /// Where arduino-cli is installed when `cli_path` does not exist
    pub install_dir: PathBuf,
    /// arduino-cli's own `--config-file`
    pub config_file: Option<PathBuf>,
    /// Extra board manager index URLs, passed comma-joined
    pub additional_urls: Vec<String>,
    /// arduino-cli's own `--log-file`
    pub log_file: Option<PathBuf>,
    pub log_format: Option<String>,
    pub log_level: Option<String>,
    pub no_color: bool,
    /// Point arduino-cli's data and user directories into `install_dir`
    pub manage_directories: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cli_path: PathBuf::from("arduino-cli"),
            install_dir: default_install_dir(),
            config_file: None,
            additional_urls: Vec::new(),
            log_file: None,
            log_format: None,
            log_level: None,
            no_color: false,
            manage_directories: false,
        }
    }
}

/// Default installation directory (`<data dir>/duinocli/arduino-cli`).
pub fn default_install_dir() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join(INSTALL_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("~/.duinocli").join(INSTALL_DIR_NAME))
}

/// Get the XDG config directory for duinocli.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("duinocli.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    pub fn layout(&self) -> InstallLayout {
        InstallLayout::new(&self.install_dir)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.cli_path = expand_path(&self.cli_path);
        self.install_dir = expand_path(&self.install_dir);
        self.config_file = self.config_file.as_deref().map(expand_path);
        self.log_file = self.log_file.as_deref().map(expand_path);
    }

    /// Overlay `raw` onto self: every field the overlay specifies wins.
    pub fn merge_with(&self, raw: &RawSettings) -> Self {
        Self {
            cli_path: raw.cli_path.clone().unwrap_or_else(|| self.cli_path.clone()),
            install_dir: raw
                .install_dir
                .clone()
                .unwrap_or_else(|| self.install_dir.clone()),
            config_file: raw.config_file.clone().or_else(|| self.config_file.clone()),
            additional_urls: raw
                .additional_urls
                .clone()
                .unwrap_or_else(|| self.additional_urls.clone()),
            log_file: raw.log_file.clone().or_else(|| self.log_file.clone()),
            log_format: raw.log_format.clone().or_else(|| self.log_format.clone()),
            log_level: raw.log_level.clone().or_else(|| self.log_level.clone()),
            no_color: raw.no_color.unwrap_or(self.no_color),
            manage_directories: raw.manage_directories.unwrap_or(self.manage_directories),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional settings file given on the command line; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/duinocli/duinocli.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `DUINOCLI_*` prefix
    ///
    /// Lists replace rather than merge at every layer.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = explicit {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply DUINOCLI_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("DUINOCLI")
                .list_separator(",")
                .with_list_parse_key("additional_urls")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        let mut raw = RawSettings::default();
        if let Ok(val) = config.get_string("cli_path") {
            raw.cli_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("install_dir") {
            raw.install_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("config_file") {
            raw.config_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get::<Vec<String>>("additional_urls") {
            raw.additional_urls = Some(val);
        }
        if let Ok(val) = config.get_string("log_file") {
            raw.log_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("log_format") {
            raw.log_format = Some(val);
        }
        if let Ok(val) = config.get_string("log_level") {
            raw.log_level = Some(val);
        }
        if let Ok(val) = config.get_bool("no_color") {
            raw.no_color = Some(val);
        }
        if let Ok(val) = config.get_bool("manage_directories") {
            raw.manage_directories = Some(val);
        }

        Ok(settings.merge_with(&raw))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# duinocli configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/duinocli/duinocli.toml
#   Explicit: file passed with --settings
#   Env:      DUINOCLI_* environment variables (lists comma-separated)
#   Flags:    command-line options

# arduino-cli executable to use when it exists
# cli_path = "arduino-cli"

# Installation directory used when cli_path does not exist
# install_dir = "~/.local/share/duinocli/arduino-cli"

# Forwarded to arduino-cli as global flags
# config_file = "~/arduino-cli.yaml"
# additional_urls = ["https://arduino.esp8266.com/stable/package_esp8266com_index.json"]
# log_file = "/tmp/arduino-cli.log"
# log_format = "json"
# log_level = "info"
# no_color = false

# Keep arduino-cli's data and user directories inside install_dir
# manage_directories = false
"#
        .to_string()
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(path.to_string_lossy().as_ref()))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
