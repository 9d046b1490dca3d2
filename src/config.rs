//! Configuration for the targetgen driver.
//!
//! Settings come from an optional TOML file; command-line flags override
//! whatever the file provides.
//!
//! ```toml
//! target = "php"
//! template_dir = "./templates"
//! output_dir = "./generated"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Target used when neither the config file nor the command line names one
pub const DEFAULT_TARGET: &str = "php";

/// Configuration for a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of the target language adapter
    pub target: Option<String>,
    /// Directory with `<Target>/*.tera` template groups overriding the embedded ones
    pub template_dir: Option<PathBuf>,
    /// Directory generated files are written to
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration file");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay values given explicitly, keeping file values where none was given
    pub fn with_overrides(
        mut self,
        target: Option<String>,
        template_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if target.is_some() {
            self.target = target;
        }
        if template_dir.is_some() {
            self.template_dir = template_dir;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self
    }

    /// Target name to generate for
    pub fn target_name(&self) -> &str {
        self.target.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    /// Output directory, defaulting to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
