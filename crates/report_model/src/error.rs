//! Error types for report model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    /// NaN or infinite geometry; JSON cannot hold it
    #[error("Non-finite number in '{0}'")]
    NonFiniteNumber(String),

    #[error("Invalid regions: {0}")]
    InvalidRegions(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
