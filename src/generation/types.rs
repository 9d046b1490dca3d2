//! Core types for the generation domain

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Name and version of a target language adapter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TargetIdentity {
    name: String,
    version: String,
}

impl TargetIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Language tag, also the template group key (e.g. `Php`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version of the runtime the generated code targets
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for TargetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Fixed per-target capabilities consulted by the rendering pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityFlags {
    /// Whether same-named operations with different signatures may share one name
    pub supports_overloaded_methods: bool,
    /// Maximum number of serialized table entries emitted as one literal
    pub serialized_segment_limit: usize,
}

impl CapabilityFlags {
    pub const fn new(supports_overloaded_methods: bool, serialized_segment_limit: usize) -> Self {
        Self {
            supports_overloaded_methods,
            serialized_segment_limit,
        }
    }
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
