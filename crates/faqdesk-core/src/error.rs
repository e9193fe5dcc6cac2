//! Error types for FaqDesk.

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, FaqDeskError>;

#[derive(Debug, Error)]
pub enum FaqDeskError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Extraction error: {0}")]
    Extract(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
