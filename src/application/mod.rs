//! Application layer: façades, executor and services
//!
//! This layer turns calls into arduino-cli invocations and depends on I/O boundary traits.

pub mod arduino;
pub mod commands;
pub mod error;
pub mod error_ext;
pub mod executor;
pub mod services;

pub use arduino::ArduinoCli;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use executor::{execute, CommandBase};
