//! Domain entities: core data structures

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::DomainError;

/// Platform family the binding runs on.
///
/// Decides both the executable name and the installation strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Release zip archive, `arduino-cli.exe`
    Windows,
    /// Remote install script, `arduino-cli`
    Unix,
    /// Anything else; no installation strategy exists
    Other(String),
}

impl Platform {
    /// Platform of the running binary, from the compile target family.
    pub fn current() -> Self {
        Self::from_family(std::env::consts::FAMILY)
    }

    /// Map a target family identifier (`"windows"`, `"unix"`, ...) to a platform.
    pub fn from_family(family: &str) -> Self {
        match family {
            "windows" => Platform::Windows,
            "unix" => Platform::Unix,
            other => Platform::Other(other.to_string()),
        }
    }

    /// File name of the arduino-cli executable on this platform.
    pub fn executable_name(&self) -> Result<&'static str, DomainError> {
        match self {
            Platform::Windows => Ok("arduino-cli.exe"),
            Platform::Unix => Ok("arduino-cli"),
            Platform::Other(family) => Err(DomainError::UnsupportedPlatform(family.clone())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Unix => write!(f, "unix"),
            Platform::Other(family) => write!(f, "{family}"),
        }
    }
}

/// Standard output of an invocation, decoded when possible.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CliOutput {
    /// stdout was valid JSON
    Parsed(Value),
    /// stdout was not JSON (or empty); kept verbatim
    Raw(String),
}

impl CliOutput {
    /// Decode `stdout` as JSON, falling back to the raw text.
    ///
    /// A decode failure is not an error: plenty of arduino-cli subcommands
    /// print plain text even with `--format json`.
    pub fn parse(stdout: &str) -> Self {
        match serde_json::from_str::<Value>(stdout) {
            Ok(value) => CliOutput::Parsed(value),
            Err(_) => CliOutput::Raw(stdout.to_string()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            CliOutput::Parsed(value) => Some(value),
            CliOutput::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            CliOutput::Parsed(_) => None,
            CliOutput::Raw(text) => Some(text),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, CliOutput::Parsed(_))
    }
}

/// Everything captured from one arduino-cli run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationResult {
    /// Raw standard output
    pub stdout: String,
    /// Raw standard error
    pub stderr: String,
    /// Decoded standard output
    pub result: CliOutput,
}

impl InvocationResult {
    /// Build a result from captured output, decoding stdout.
    pub fn from_output(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        let stdout = stdout.into();
        let result = CliOutput::parse(&stdout);
        Self {
            stdout,
            stderr: stderr.into(),
            result,
        }
    }

    /// Decoded JSON, if stdout was JSON.
    pub fn json(&self) -> Option<&Value> {
        self.result.as_json()
    }
}

/// Expand shell variables and tilde in a path string.
///
/// Handles `~`, `$VAR`, and `${VAR}` syntax. Unknown variables leave the
/// input unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
