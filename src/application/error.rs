//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, InvocationResult};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// arduino-cli ran and exited unsuccessfully; carries everything it printed.
    #[error("arduino-cli failed ({}): {}", describe_exit(.exit_code), .result.stderr.trim())]
    CommandFailed {
        exit_code: Option<i32>,
        result: Box<InvocationResult>,
    },

    #[error("arduino-cli installation failed: {message}")]
    InstallFailed {
        message: String,
        exit_code: Option<i32>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Captured output of a failed arduino-cli run.
    pub fn invocation(&self) -> Option<&InvocationResult> {
        match self {
            ApplicationError::CommandFailed { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Exit code of the failed child process, if one was reported.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ApplicationError::CommandFailed { exit_code, .. }
            | ApplicationError::InstallFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
