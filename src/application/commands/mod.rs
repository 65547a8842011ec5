//! One façade per arduino-cli subcommand family
//!
//! Each façade owns a copy of the base argument vector with its subcommand
//! appended and exposes one method per operation. None of them validate
//! argument combinations; arduino-cli rejects what it does not accept.

mod board;
mod burn_bootloader;
mod cache;
mod compile;
mod completion;
mod config;
mod core;
mod daemon;
mod debug;
mod lib;
mod monitor;
mod outdated;
mod sketch;
mod update;
mod upgrade;
mod upload;
mod version;

pub use board::BoardCommand;
pub use burn_bootloader::{BurnBootloaderCommand, BurnBootloaderOptions};
pub use cache::CacheCommand;
pub use compile::{CompileCommand, CompileOptions};
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use core::{CoreCommand, CoreInstallOptions};
pub use daemon::DaemonCommand;
pub use debug::{DebugCommand, DebugOptions};
pub use lib::{LibCommand, LibInstallOptions};
pub use monitor::{MonitorCommand, MonitorOptions};
pub use outdated::OutdatedCommand;
pub use sketch::SketchCommand;
pub use update::UpdateCommand;
pub use upgrade::UpgradeCommand;
pub use upload::{UploadCommand, UploadOptions};
pub use version::VersionCommand;
