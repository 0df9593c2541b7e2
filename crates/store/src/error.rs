//! Error types for storage operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template text that is not valid JSON or lacks required fields
    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Report model error: {0}")]
    Model(#[from] report_model::ModelError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
