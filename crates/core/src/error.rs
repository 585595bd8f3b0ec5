//! Error types for offsetgen

use crate::types::Address;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the generator
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed signature for {name} at {address}: {reason} (signature: {signature:?})")]
    MalformedSignature {
        name: String,
        address: Address,
        signature: String,
        reason: String,
    },

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output directory is missing or not a directory: {}", .0.display())]
    OutputDirectoryInvalid(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed_signature(
        name: impl Into<String>,
        address: Address,
        signature: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSignature {
            name: name.into(),
            address,
            signature: signature.into(),
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
