//! Error types for textrank_summary

use thiserror::Error;

/// Errors produced while building or querying a TextRank summary
#[derive(Error, Debug)]
pub enum TextRankError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The tokenizer capability rejected a sentence
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// The word-rank linear system had no unique solution.
    ///
    /// The system matrix is column diagonally dominant by construction, so
    /// this indicates a broken internal invariant rather than bad input.
    #[error("word rank system of size {size} is singular")]
    SingularMatrix { size: usize },

    /// A JSON configuration could not be parsed
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextRankError {
    /// Build an [`TextRankError::InvalidConfig`] error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`TextRankError::Tokenization`] error
    pub fn tokenization(msg: impl Into<String>) -> Self {
        Self::Tokenization(msg.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;
