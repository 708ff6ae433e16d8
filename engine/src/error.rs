//! Error types for the QuoteSync engine.

use crate::IdentityKey;
use thiserror::Error;

/// All possible errors from the QuoteSync engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("quote text must not be empty")]
    EmptyText,

    #[error("quote category must not be empty")]
    EmptyCategory,

    #[error("quote already exists: {0}")]
    DuplicateQuote(IdentityKey),

    // Serialization errors
    #[error("malformed quote data: {0}")]
    Decode(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
