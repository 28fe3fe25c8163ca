//! Error types for the kotogram library.
//!
//! All fallible operations return [`KotogramError`] through the crate-wide
//! [`Result`] alias. Matching itself never fails: a pattern that does not
//! occur in a sentence is reported as `None` or an empty list, not as an error.
//! Errors only come from building rules, parsing external input (tag labels,
//! notation strings, analyzer output) and file I/O.
//!
//! # Examples
//!
//! ```
//! use kotogram::error::{KotogramError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(KotogramError::config("pattern sequence is empty"))
//! }
//!
//! match build() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for kotogram operations.
#[derive(Error, Debug)]
pub enum KotogramError {
    /// I/O errors (rule files, token files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rule construction errors. Raised before a rule becomes usable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown tag labels, malformed notation or analyzer output
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KotogramError.
pub type Result<T> = std::result::Result<T, KotogramError>;

impl KotogramError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        KotogramError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        KotogramError::Parse(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KotogramError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KotogramError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        KotogramError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Whether this error was raised while building a rule.
    pub fn is_config(&self) -> bool {
        matches!(self, KotogramError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = KotogramError::config("two stars");
        assert_eq!(error.to_string(), "Configuration error: two stars");
        assert!(error.is_config());

        let error = KotogramError::parse("unknown label");
        assert_eq!(error.to_string(), "Parse error: unknown label");
        assert!(!error.is_config());

        let error = KotogramError::internal("pool");
        assert_eq!(error.to_string(), "Error: Internal error: pool");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = KotogramError::from(io_error);

        match error {
            KotogramError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        let error: KotogramError = anyhow::anyhow!("truncated line").into();
        assert_eq!(error.to_string(), "Anyhow error: truncated line");
    }
}
