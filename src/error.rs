//! Error types for masthead.

use thiserror::Error;

/// Result type for masthead operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in masthead operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No search keyword was supplied.
    #[error("Search keyword is missing")]
    MissingKeyword,

    /// The search keyword is below the minimum length.
    #[error("Search keyword '{keyword}' is shorter than {min} characters")]
    KeywordTooShort {
        /// The rejected keyword.
        keyword: String,
        /// Minimum number of characters required.
        min: usize,
    },

    /// Two navigation items declare the same path.
    #[error("Navigation item path '{0}' is declared more than once")]
    DuplicateRoute(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
