//! Error types for the generation domain

use thiserror::Error;

use crate::infrastructure::templates::TemplateError;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Unknown target language: {0}")]
    UnknownTarget(String),

    #[error("Symbols conflict with generated code in target {target}: {}", symbols.join(", "))]
    ReservedSymbol {
        target: String,
        symbols: Vec<String>,
    },

    #[error("Invalid grammar: {0}")]
    InvalidGrammar(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
