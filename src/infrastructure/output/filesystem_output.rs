//! Filesystem-based output service implementation

use std::fs;
use std::path::{Path, PathBuf};

use crate::generation::{Artifact, GenerationError};

/// Output service that writes artifacts below a root directory
pub struct FileSystemOutputService {
    root: PathBuf,
}

impl FileSystemOutputService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write every artifact, creating parent directories as needed.
    ///
    /// Returns the written paths in artifact order.
    pub fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, GenerationError> {
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            if artifact.path.is_absolute() {
                return Err(GenerationError::OutputError(format!(
                    "Artifact path must be relative: {}",
                    artifact.path.display()
                )));
            }
            let path = self.root.join(&artifact.path);

            if let Some(parent) = path.parent() {
                self.ensure_directory(parent)?;
            }

            fs::write(&path, &artifact.content).map_err(|e| {
                GenerationError::OutputError(format!(
                    "Failed to write file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::debug!(path = %path.display(), bytes = artifact.content.len(), "Wrote artifact");
            written.push(path);
        }

        Ok(written)
    }

    pub fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError> {
        fs::create_dir_all(path).map_err(|e| {
            GenerationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new(".")
    }
}
