//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;
use crate::schema::SchemaError;
use gormgen_core::RenderError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema description error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Filters left nothing to generate
    #[error("No tables matched filter: {0}")]
    NoTables(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
