//! Error handling for the discforge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for discforge operations.
///
/// This enum represents all possible errors that can occur while generating
/// a pack. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while serializing structured pack files
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur while packaging a pack into an archive
    #[error("Archive error: {0}.")]
    ZipError(#[from] zip::result::ZipError),

    /// A placeholder has no resolvable value in the substitution context
    #[error("No value for placeholder '{placeholder}' in the substitution context.")]
    MissingKeyError { placeholder: String },

    /// Represents defects in a template string or placeholder lookup
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// A catalog entry's content body is neither text nor structured
    #[error("Pack file contents must be text or a structured body.")]
    UnsupportedContentsError,

    /// A rendered value contains characters that cannot be written out
    #[error("Rendered value {value:?} contains characters that cannot be encoded.")]
    EncodingError { value: String },

    /// The destination directory exists but is not recognized pack output
    #[error("Directory '{dir}' already exists and does not look like generated pack output.")]
    PackDirInUseError { dir: String },

    /// Represents errors in the manifest or the template catalog
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with discforge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
