//! Error handling for the targetgen library.
//!
//! This module defines the crate-level error type `Error` used by the
//! configuration layer and the command-line driver, along with a convenient
//! `Result` type alias. Domain errors from the generation and template layers
//! convert into it with `?`.
//!
//! # Examples
//!
//! ```
//! use targetgen::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("no target selected"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::generation::GenerationError;
use crate::infrastructure::templates::TemplateError;

/// Result type for targetgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for targetgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Code generation error
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<TemplateError> for Error {
    fn from(err: TemplateError) -> Self {
        Self::Generation(GenerationError::Template(err))
    }
}
