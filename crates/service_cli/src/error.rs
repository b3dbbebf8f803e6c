//! CLI error types

use pricer_core::types::KernelError;
use pricer_pricing::dispatch::DispatchError;
use pricer_pricing::grid::GridError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `mcgrid` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Grid evaluation failed: {0}")]
    Grid(#[from] GridError),

    #[error("Pricing failed: {0}")]
    Kernel(#[from] KernelError),

    #[error("Worker pool error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialisation(e.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Serialisation(e.to_string())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
