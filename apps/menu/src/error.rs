//! # Application Errors
//!
//! Errors raised by the binary: everything the core can report, plus
//! configuration and I/O failures that only exist at this layer.

use menu_core::MenuError;
use thiserror::Error;

/// Errors that can occur in the menu application.
#[derive(Debug, Error)]
pub enum AppError {
    /// A core operation was rejected.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The configuration file or an override is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
