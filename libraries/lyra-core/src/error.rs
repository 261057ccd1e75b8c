//! Core error types for Lyra

use thiserror::Error;

/// Result type alias using `LyraError`
pub type Result<T> = std::result::Result<T, LyraError>;

/// Core error type for Lyra
#[derive(Error, Debug)]
pub enum LyraError {
    /// Controller-side failure (registration rejected, unknown token)
    #[error("Controller error: {0}")]
    Controller(String),

    /// The controller's underlying session is gone
    #[error("Session disconnected")]
    Disconnected,
}

impl LyraError {
    /// Create a controller error
    pub fn controller(msg: impl Into<String>) -> Self {
        Self::Controller(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_error_display() {
        let err = LyraError::controller("callback table full");
        assert_eq!(err.to_string(), "Controller error: callback table full");
    }

    #[test]
    fn test_disconnected_display() {
        assert_eq!(LyraError::Disconnected.to_string(), "Session disconnected");
    }
}
