use std::io;
use thiserror::Error;

/// Error type for the outer surfaces of csv-sift.
///
/// Dialect detection and tokenizing never fail; these variants only come
/// from reading input, writing output, validating configuration, and the
/// language-dependent normalizers.
#[derive(Error, Debug)]
pub enum SiftError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No stemmer or stopword list exists for the requested locale.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type alias for csv-sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
