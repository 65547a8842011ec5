//! Process executor shared by every façade
//!
//! One call, one child process: run it to completion, capture both streams,
//! decode stdout, and turn a non-zero exit into [`ApplicationError::CommandFailed`].

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{BaseArgs, InvocationResult};
use crate::infrastructure::traits::CommandRunner;

/// Run `command` (first element is the program) and collect its result.
///
/// Exit code 0 is success no matter what stderr contains.
pub fn execute(runner: &dyn CommandRunner, command: &[String]) -> ApplicationResult<InvocationResult> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| ApplicationError::Config {
            message: "empty command line".into(),
        })?;
    debug!("execute: {:?}", command);

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = runner
        .run(program, &args)
        .with_context(|| format!("run {program}"))?;

    let result = InvocationResult::from_output(
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );

    if !output.status.success() {
        debug!(
            "execute: {} exited with {:?}",
            program,
            output.status.code()
        );
        return Err(ApplicationError::CommandFailed {
            exit_code: output.status.code(),
            result: Box::new(result),
        });
    }

    Ok(result)
}

/// A base argument vector bound to a command runner.
///
/// Façades hold one of these with their subcommand already appended.
#[derive(Clone)]
pub struct CommandBase {
    base_args: BaseArgs,
    runner: Arc<dyn CommandRunner>,
}

impl CommandBase {
    pub fn new(base_args: BaseArgs, runner: Arc<dyn CommandRunner>) -> Self {
        Self { base_args, runner }
    }

    /// Copy of this base with `subcommand` appended to the argument vector.
    pub fn with_subcommand(&self, subcommand: &str) -> Self {
        Self {
            base_args: self.base_args.with_subcommand(subcommand),
            runner: Arc::clone(&self.runner),
        }
    }

    pub fn base_args(&self) -> &BaseArgs {
        &self.base_args
    }

    /// Run the base vector followed by `args`.
    pub fn exec(&self, args: impl Into<Vec<String>>) -> ApplicationResult<InvocationResult> {
        let command = self.base_args.command_line(&args.into());
        execute(self.runner.as_ref(), &command)
    }
}

impl std::fmt::Debug for CommandBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBase")
            .field("base_args", &self.base_args)
            .finish_non_exhaustive()
    }
}
