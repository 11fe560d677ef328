//! Error types for the Folio library.
//!
//! All errors are represented by the [`FolioError`] enum. Analysis stages are
//! total over string input, so in practice errors come from configuration,
//! I/O and document retrieval.
//!
//! # Examples
//!
//! ```
//! use folio::error::{FolioError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FolioError::invalid_argument("min_token_length must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O errors (reading input files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Document retrieval failed (transport error or non-success status)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The cleaned output was empty but the caller required tokens
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Malformed option or argument at a public boundary
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup miss (e.g. a token absent from a corpus vocabulary)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with FolioError.
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FolioError::Analysis(msg.into())
    }

    /// Create a new fetch error.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        FolioError::Fetch(msg.into())
    }

    /// Create a new empty input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        FolioError::EmptyInput(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FolioError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        FolioError::NotFound(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FolioError::Config(msg.into())
    }

    /// Whether this error came from document retrieval.
    pub fn is_fetch(&self) -> bool {
        matches!(self, FolioError::Fetch(_))
    }
}
