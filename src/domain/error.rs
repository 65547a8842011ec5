//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid inputs to the binding itself.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}
