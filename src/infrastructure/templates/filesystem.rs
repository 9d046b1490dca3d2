//! Filesystem-based template loader
//!
//! Loads template groups from a directory laid out like the embedded
//! templates (`<root>/<Target>/*.tera`), typically given with the
//! `--template-dir` CLI flag.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::generation::TargetIdentity;
use crate::infrastructure::templates::{
    TEMPLATE_SUFFIX, TemplateError, TemplateGroup, TemplateGroupLoader,
};

/// Template loader reading groups from a directory tree
#[derive(Debug, Clone)]
pub struct FileSystemTemplateLoader {
    root: PathBuf,
}

impl FileSystemTemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateGroupLoader for FileSystemTemplateLoader {
    fn load(&self, target: &TargetIdentity) -> Result<TemplateGroup, TemplateError> {
        let dir = self.root.join(target.name());
        if !dir.is_dir() {
            return Err(TemplateError::not_found(dir.to_string_lossy()));
        }

        let mut sources = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !path.is_file() || !file_name.ends_with(TEMPLATE_SUFFIX) {
                continue;
            }
            sources.push((file_name.to_string(), fs::read_to_string(&path)?));
        }

        debug!(
            target_language = target.name(),
            dir = %dir.display(),
            files = sources.len(),
            "Loading template group from filesystem"
        );

        TemplateGroup::from_sources(target.name(), sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_group_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let group_dir = temp_dir.path().join("Tiny");
        fs::create_dir_all(&group_dir).unwrap();
        fs::write(group_dir.join("Parser.tiny.tera"), "parser {{ grammar_name }}").unwrap();
        fs::write(group_dir.join("notes.txt"), "ignored").unwrap();

        let loader = FileSystemTemplateLoader::new(temp_dir.path());
        let group = loader.load(&TargetIdentity::new("Tiny", "1.0")).unwrap();

        assert_eq!(group.template_names(), vec!["Parser.tiny"]);
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let loader = FileSystemTemplateLoader::new(temp_dir.path());

        let err = loader.load(&TargetIdentity::new("Tiny", "1.0")).unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound(_)));
    }

    #[test]
    fn test_directory_without_templates_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Tiny")).unwrap();
        let loader = FileSystemTemplateLoader::new(temp_dir.path());

        let err = loader.load(&TargetIdentity::new("Tiny", "1.0")).unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound(_)));
    }
}
