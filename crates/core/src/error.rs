//! Error types for the session and its configuration.

use thiserror::Error;

use crate::types::GameStatus;

/// Recoverable session errors. Core state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the current game has not finished ({status}); end it before starting a new one")]
    GameInProgress { status: GameStatus },
}

/// Invalid session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{field} must be greater than zero")]
    ZeroDimension { field: &'static str },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u16,
        max: u16,
    },
}
