use std::collections::VecDeque;
use std::env;
use std::io;
use std::process::{ExitStatus, Output};
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::CommandRunner;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::ENTER)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Build an `ExitStatus` carrying `code`.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

/// Build an `ExitStatus` carrying `code`.
#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

enum Scripted {
    Output(Output),
    SpawnError(io::ErrorKind),
}

/// Command runner that records every call and replays scripted outputs.
///
/// Responses are consumed in order; once exhausted every call succeeds
/// with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Vec<String>>>,
    responses: Mutex<VecDeque<Scripted>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given exit code and captured streams.
    pub fn respond(self, code: i32, stdout: &str, stderr: &str) -> Self {
        self.push(Scripted::Output(Output {
            status: exit_status(code),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }));
        self
    }

    /// Queue a response for a child killed by `signal` (no exit code).
    #[cfg(unix)]
    pub fn respond_signal(self, signal: i32, stdout: &str, stderr: &str) -> Self {
        use std::os::unix::process::ExitStatusExt;
        self.push(Scripted::Output(Output {
            status: ExitStatus::from_raw(signal),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }));
        self
    }

    /// Queue a failure to spawn the process.
    pub fn fail_spawn(self, kind: io::ErrorKind) -> Self {
        self.push(Scripted::SpawnError(kind));
        self
    }

    fn push(&self, scripted: Scripted) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(scripted);
    }

    /// Every recorded call as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls().pop()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        let mut call = vec![cmd.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);

        let next = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::SpawnError(kind)) => Err(io::Error::new(kind, "scripted spawn failure")),
            None => Ok(Output {
                status: exit_status(0),
                stdout: Vec::new(),
                stderr: Vec::new(),
            }),
        }
    }
}
