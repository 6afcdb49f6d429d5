//! Error types for textify library.

use std::io;
use thiserror::Error;

/// Result type alias for textify operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning markup into text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files or streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input buffer is empty or too short to hold a document.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The markup could not be turned into a document tree.
    #[error("HTML parsing error: {0}")]
    Parse(String),

    /// The parsed document has no root element.
    #[error("Document has no root element")]
    EmptyDocument,

    /// The document produced no text after rendering.
    #[error("No text content extracted")]
    NoTextExtracted,

    /// Error serializing statistics.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

}
