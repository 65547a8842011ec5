//! Rust binding for the `arduino-cli` executable
//!
//! Locates (or installs) arduino-cli, builds its argument vectors through one
//! façade per subcommand, and returns captured output with stdout decoded as
//! JSON when possible.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, ArduinoCli};
pub use domain::{CliOutput, InvocationResult};
