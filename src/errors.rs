//! Unified application error type.
//! Stores, transport, config and cli all return AppError so that every
//! failure reaches the caller the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Preconditions
    // ---------------------------
    #[error("User not authenticated")]
    Unauthenticated,

    #[error("Missing credentials: {0}")]
    Credentials(String),

    #[error("Login failed: invalid credentials or service unavailable")]
    LoginFailed,

    #[error("{0}")]
    LocationUnavailable(String),

    // ---------------------------
    // Remote service
    // ---------------------------
    /// Server answered with a non-success status. The message is either the
    /// one supplied by the server or the operation's fallback text.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Parse(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Parse(e.to_string())
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
