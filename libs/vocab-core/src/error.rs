//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Violated preconditions of the answer checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("vocabulary is empty, should contain at least one word")]
    EmptyVocabulary,

    #[error("word not in vocabulary: {key}")]
    UnknownKey { key: String },
}

/// Errors that can occur while loading a word list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing '=' separator at line {line}")]
    MissingSeparator { line: usize },

    #[error("empty word at line {line}")]
    EmptyWord { line: usize },

    #[error("empty translation at line {line}")]
    EmptyTranslation { line: usize },

    #[error("duplicate word {word} at line {line}")]
    DuplicateWord { word: String, line: usize },

    #[error("invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),
}
