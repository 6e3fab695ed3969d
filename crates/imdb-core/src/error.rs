//! Error types for IMDb Movie Star Search
//!
//! This module defines all error types used throughout the library.
//! ImdbError implements Serialize so it can be reported as plain text.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for IMDb scraping operations
#[derive(Error, Debug)]
pub enum ImdbError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A selector or pattern could not be compiled
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Markup the page layout guarantees was missing
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL or query
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Writing an export file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding an export document failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize ImdbError as its display string
impl Serialize for ImdbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for IMDb scraping operations
pub type Result<T> = std::result::Result<T, ImdbError>;
