//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::{CliOutput, InvocationResult};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Render stdout of an invocation: pretty JSON when parsed, verbatim otherwise.
pub fn render(output: &CliOutput) -> String {
    match output {
        CliOutput::Parsed(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        CliOutput::Raw(text) => text.trim_end().to_string(),
    }
}

/// Print a successful invocation; stderr chatter is shown as a warning.
pub fn invocation(result: &InvocationResult) {
    let stderr = result.stderr.trim();
    if !stderr.is_empty() {
        warning(stderr);
    }
    let rendered = render(&result.result);
    if !rendered.is_empty() {
        info(&rendered);
    }
}

/// Print a failed invocation: whatever it wrote to stdout, then its stderr as an error.
pub fn failed_invocation(result: &InvocationResult) {
    let rendered = render(&result.result);
    if !rendered.is_empty() {
        info(&rendered);
    }
    let stderr = result.stderr.trim();
    if stderr.is_empty() {
        error("arduino-cli failed without output on stderr");
    } else {
        error(stderr);
    }
}
