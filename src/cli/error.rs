//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Application error underneath, if any.
    pub fn application(&self) -> Option<&ApplicationError> {
        match self {
            CliError::Infra(InfraError::Application(e)) => Some(e),
            _ => None,
        }
    }

    /// Get the appropriate exit code for this error.
    ///
    /// A failed arduino-cli run passes its own exit code through.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::CommandFailed { exit_code, .. } => {
                        exit_code.unwrap_or(crate::exitcode::SOFTWARE)
                    }
                    ApplicationError::InstallFailed { .. } => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Domain(DomainError::UnsupportedPlatform(_)) => {
                        crate::exitcode::CONFIG
                    }
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InvocationResult;

    #[test]
    fn given_failed_run_when_exit_code_then_child_code_passes_through() {
        let err: CliError = ApplicationError::CommandFailed {
            exit_code: Some(3),
            result: Box::new(InvocationResult::from_output("", "boom")),
        }
        .into();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn given_signal_killed_run_when_exit_code_then_software() {
        let err: CliError = ApplicationError::CommandFailed {
            exit_code: None,
            result: Box::new(InvocationResult::from_output("", "")),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }

    #[test]
    fn given_unsupported_platform_when_exit_code_then_config() {
        let err: CliError =
            ApplicationError::from(DomainError::UnsupportedPlatform("wasm".into())).into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_usage_error_when_exit_code_then_usage_and_no_invocation() {
        let err = CliError::Usage("settings file already exists".into());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
        assert!(err.application().is_none());
        assert_eq!(err.to_string(), "settings file already exists");
    }

    #[test]
    fn given_failed_install_when_exit_code_then_unavailable() {
        let err: CliError = ApplicationError::InstallFailed {
            message: "install script produced no executable at /opt/duino/arduino-cli".into(),
            exit_code: Some(0),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
    }
}
