// ABOUTME: Error types for the deck-slides library
// ABOUTME: Provides structured error handling for extraction and page generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("File operation failed: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to serialize slide text for digest: {0}")]
    DigestError(#[from] serde_json::Error),

    #[error("Slide query failed: {0}")]
    QueryError(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
