//! Error types for the template infrastructure layer

use thiserror::Error;

/// Errors that can occur in template operations
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No templates exist for the requested group
    #[error("Template group not found: {0}")]
    TemplateNotFound(String),

    /// Template text could not be parsed or rendered by the engine
    #[error("Template engine error: {0}")]
    Engine(#[from] tera::Error),

    /// IO error during template operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Template source is unusable, e.g. not valid UTF-8
    #[error("Invalid template {name}: {reason}")]
    InvalidTemplate { name: String, reason: String },
}

impl TemplateError {
    /// Create a new template not found error
    pub fn not_found<S: Into<String>>(group: S) -> Self {
        Self::TemplateNotFound(group.into())
    }

    /// Create a new invalid template error
    pub fn invalid<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidTemplate {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
