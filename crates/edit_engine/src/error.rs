//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Report model error: {0}")]
    Model(#[from] report_model::ModelError),
}

pub type Result<T> = std::result::Result<T, EditError>;
