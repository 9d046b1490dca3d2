//! Template groups embedded in the binary at compile time.
//!
//! Every file under `templates/<Target>/` ending in `.tera` belongs to that
//! target's group, so the generator works after `cargo install` without a
//! separate template directory.

use rust_embed::RustEmbed;
use tracing::debug;

use crate::generation::TargetIdentity;
use crate::infrastructure::templates::{
    TEMPLATE_SUFFIX, TemplateError, TemplateGroup, TemplateGroupLoader,
};

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct EmbeddedTemplates;

/// Loads template groups from [`EmbeddedTemplates`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateLoader;

impl EmbeddedTemplateLoader {
    pub fn new() -> Self {
        Self
    }

    /// Names of all embedded groups, sorted
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter()
            .filter_map(|path| path.split_once('/').map(|(group, _)| group.to_string()))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

impl TemplateGroupLoader for EmbeddedTemplateLoader {
    fn load(&self, target: &TargetIdentity) -> Result<TemplateGroup, TemplateError> {
        let prefix = format!("{}/", target.name());
        let mut sources = Vec::new();

        for path in EmbeddedTemplates::iter() {
            let Some(template_name) = path.strip_prefix(&prefix) else {
                continue;
            };
            if !template_name.ends_with(TEMPLATE_SUFFIX) || template_name.contains('/') {
                continue;
            }

            let file = EmbeddedTemplates::get(&path)
                .ok_or_else(|| TemplateError::not_found(path.to_string()))?;
            let content = String::from_utf8(file.data.into_owned())
                .map_err(|e| TemplateError::invalid(path.to_string(), e.to_string()))?;
            sources.push((template_name.to_string(), content));
        }

        debug!(
            target_language = target.name(),
            files = sources.len(),
            "Loading embedded template group"
        );

        TemplateGroup::from_sources(target.name(), sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_php_group_is_embedded() {
        let loader = EmbeddedTemplateLoader::new();
        assert!(loader.group_names().contains(&"Php".to_string()));

        let group = loader.load(&TargetIdentity::new("Php", "4.7.2")).unwrap();
        assert_eq!(group.name(), "Php");
        assert!(group.template_names().contains(&"Parser.php"));
        assert!(group.template_names().contains(&"Listener.php"));
    }

    #[test]
    fn test_missing_group_is_not_found() {
        let loader = EmbeddedTemplateLoader::new();
        let err = loader
            .load(&TargetIdentity::new("Cobol", "1.0"))
            .unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound(_)));
    }
}
