//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, etc.)
//! but are themselves concrete structs, not traits.

mod installer;
mod locator;

pub use installer::{install_script_command, Installer, INSTALL_SCRIPT_URL, WINDOWS_ARCHIVE_URL};
pub use locator::ExecutableLocator;
