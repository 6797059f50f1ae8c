//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::catalog::CatalogError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("Config error: {0}")]
    Config(String),

    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Request or response JSON could not be processed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Point lookup found nothing
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Catalog failed to load
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CLI_CONFIG_ERROR",
            CliError::Io(_) => "CLI_IO_ERROR",
            CliError::Json(_) => "CLI_INVALID_JSON",
            CliError::NotFound(_) => "CLI_NOT_FOUND",
            CliError::Catalog(e) => e.code(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
