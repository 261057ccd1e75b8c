//! Session adapter error types

use lyra_core::LyraError;
use thiserror::Error;

/// Result type for session adapter operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced while rewiring controller callbacks
#[derive(Debug, Error)]
pub enum SessionError {
    /// The controller rejected a callback operation
    #[error("Controller callback operation failed: {0}")]
    Controller(#[from] LyraError),
}
