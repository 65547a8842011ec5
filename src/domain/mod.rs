//! Domain layer: entities and argument construction
//!
//! This layer is independent of external concerns (no I/O, no process spawning, no config loading).

pub mod args;
pub mod entities;
pub mod error;
pub mod flags;
pub mod layout;

pub use args::{strip_arg, strip_args, ArgList, BaseArgs, BaseArgsBuilder};
pub use entities::*;
pub use error::DomainError;
pub use layout::{InstallLayout, INSTALL_DIR_NAME};
