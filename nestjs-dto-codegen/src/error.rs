//! Error types for nestjs-dto-codegen

use thiserror::Error;

/// Result type alias for nestjs-dto-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to parse DMMF: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("related type '{related}' for '{model}.{field}' not found")]
    RelatedModelNotFound {
        model: String,
        field: String,
        related: String,
    },

    #[error("Can not find relation input props for '{model}.{field}'")]
    MissingRelationModifier { model: String, field: String },
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::ParseError(err.to_string())
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
