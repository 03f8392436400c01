//! Error handling module for the toyc driver.
//!
//! Every failure the driver can hit is a variant of [`DriverError`]; lexical
//! errors from `toyc-lex` pass through unchanged so their message keeps the
//! `in line L, pos C` suffix.

use std::path::PathBuf;

use thiserror::Error;
use toyc_lex::LexError;

/// Main error type for the toyc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when the configuration cannot be found or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a configuration file is not valid TOML.
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error when reading or writing a file fails.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Fatal lexical error in the input program.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Wraps an I/O failure together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DriverError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error came from the lexer.
    pub fn is_lexical(&self) -> bool {
        matches!(self, DriverError::Lex(_))
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
