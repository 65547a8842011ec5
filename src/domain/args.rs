//! Argument vector construction
//!
//! Every arduino-cli invocation is `base args + operation args`. The base
//! vector is built once per [`crate::application::ArduinoCli`] and never
//! mutated afterwards; operation args are assembled with [`ArgList`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::flags;

/// Strip leading dashes from a user-supplied value.
///
/// Keeps values like `--upload` typed into a port field from being read
/// as a flag by arduino-cli.
pub fn strip_arg(arg: &str) -> &str {
    arg.trim_start_matches('-')
}

/// [`strip_arg`] applied to every element.
pub fn strip_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|a| strip_arg(a.as_ref()).to_string())
        .collect()
}

/// Operation-specific arguments appended to a façade's base vector.
///
/// Flags are emitted only when their value is present; values always pass
/// through [`strip_arg`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an operation name (`list`, `install`, ...), taken verbatim.
    pub fn with(operation: &str) -> Self {
        Self(vec![operation.to_string()])
    }

    /// Append one positional value.
    pub fn arg(mut self, value: impl AsRef<str>) -> Self {
        self.0.push(strip_arg(value.as_ref()).to_string());
        self
    }

    /// Append a positional path.
    pub fn path(self, value: &Path) -> Self {
        self.arg(value.to_string_lossy())
    }

    /// Append an optional positional value.
    pub fn arg_opt(self, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(v) => self.arg(v),
            None => self,
        }
    }

    /// Append an optional positional path.
    pub fn path_opt(self, value: Option<&Path>) -> Self {
        match value {
            Some(v) => self.path(v),
            None => self,
        }
    }

    /// Append positional values in order.
    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.0.extend(strip_args(values));
        self
    }

    /// Append a bare flag when `on` is true.
    pub fn flag(mut self, flag: &str, on: bool) -> Self {
        if on {
            self.0.push(flag.to_string());
        }
        self
    }

    /// Append `flag value` when `value` is set.
    pub fn opt(mut self, flag: &str, value: Option<impl AsRef<str>>) -> Self {
        if let Some(v) = value {
            self.0.push(flag.to_string());
            self.0.push(strip_arg(v.as_ref()).to_string());
        }
        self
    }

    /// Append `flag path` when `value` is set.
    pub fn opt_path(self, flag: &str, value: Option<&Path>) -> Self {
        self.opt(flag, value.map(|p| p.to_string_lossy()))
    }

    /// Append `flag value` for numeric or other displayable options.
    pub fn opt_display(self, flag: &str, value: Option<impl fmt::Display>) -> Self {
        self.opt(flag, value.map(|v| v.to_string()))
    }

    /// Append `flag value` once per element.
    pub fn repeated<I, S>(mut self, flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for v in values {
            self.0.push(flag.to_string());
            self.0.push(strip_arg(v.as_ref()).to_string());
        }
        self
    }

    /// Append `flag a,b,c`; nothing when `values` is empty.
    pub fn joined<I, S>(mut self, flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = strip_args(values);
        if !values.is_empty() {
            self.0.push(flag.to_string());
            self.0.push(values.join(","));
        }
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<ArgList> for Vec<String> {
    fn from(list: ArgList) -> Self {
        list.0
    }
}

/// Executable path plus global flags; the shared prefix of every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseArgs(Vec<String>);

impl BaseArgs {
    /// Wrap an already-built vector (first element is the program).
    pub fn from_vec(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Copy of this vector with a subcommand appended.
    pub fn with_subcommand(&self, subcommand: &str) -> Self {
        let mut args = self.0.clone();
        args.push(subcommand.to_string());
        Self(args)
    }

    /// Full command line: a copy of the base vector followed by `extra`.
    pub fn command_line(&self, extra: &[String]) -> Vec<String> {
        let mut command = self.0.clone();
        command.extend_from_slice(extra);
        command
    }

    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Assembles [`BaseArgs`] from the executable path and optional global settings.
#[derive(Debug, Clone, Default)]
pub struct BaseArgsBuilder {
    executable: PathBuf,
    config_file: Option<PathBuf>,
    additional_urls: Vec<String>,
    log_file: Option<PathBuf>,
    log_format: Option<String>,
    log_level: Option<String>,
    no_color: bool,
}

impl BaseArgsBuilder {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            ..Self::default()
        }
    }

    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn additional_urls(mut self, urls: Vec<String>) -> Self {
        self.additional_urls = urls;
        self
    }

    pub fn log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn log_format(mut self, format: Option<String>) -> Self {
        self.log_format = format;
        self
    }

    pub fn log_level(mut self, level: Option<String>) -> Self {
        self.log_level = level;
        self
    }

    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Executable, forced JSON output, then each global flag that is set.
    pub fn build(self) -> BaseArgs {
        let mut args = vec![
            self.executable.to_string_lossy().into_owned(),
            flags::FORMAT.to_string(),
            flags::FORMAT_JSON.to_string(),
        ];
        let tail = ArgList::new()
            .opt_path(flags::CONFIG_FILE, self.config_file.as_deref())
            .joined(flags::ADDITIONAL_URLS, &self.additional_urls)
            .opt_path(flags::LOG_FILE, self.log_file.as_deref())
            .opt(flags::LOG_FORMAT, self.log_format.as_deref())
            .opt(flags::LOG_LEVEL, self.log_level.as_deref())
            .flag(flags::NO_COLOR, self.no_color);
        args.extend(tail.into_vec());
        BaseArgs(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_leading_dashes_when_strip_arg_then_removed() {
        assert_eq!(strip_arg("--config.yaml"), "config.yaml");
        assert_eq!(strip_arg("-v"), "v");
        assert_eq!(strip_arg("a-b"), "a-b");
        assert_eq!(strip_arg("---"), "");
    }

    #[test]
    fn given_only_executable_when_build_then_format_json_only() {
        let base = BaseArgsBuilder::new("tool").build();
        assert_eq!(base.as_slice(), &["tool", "--format", "json"]);
    }

    #[test]
    fn given_empty_url_list_when_build_then_flag_omitted() {
        let base = BaseArgsBuilder::new("tool")
            .additional_urls(vec![])
            .build();
        assert!(!base.as_slice().contains(&"--additional-urls".to_string()));
    }

    #[test]
    fn given_values_when_joined_then_single_comma_list() {
        let list = ArgList::new().joined("--libraries", ["-a", "b"]);
        assert_eq!(list.as_slice(), &["--libraries", "a,b"]);
    }

    #[test]
    fn given_false_flag_and_none_opt_when_build_then_nothing_emitted() {
        let list = ArgList::with("list")
            .flag("--all", false)
            .opt("--fqbn", None::<&str>);
        assert_eq!(list.as_slice(), &["list"]);
    }

    #[test]
    fn given_base_when_command_line_then_base_is_untouched() {
        let base = BaseArgs::from_vec(vec!["tool".into()]);
        let line = base.command_line(&["version".to_string()]);
        assert_eq!(line, vec!["tool", "version"]);
        assert_eq!(base.as_slice(), &["tool"]);
    }
}
