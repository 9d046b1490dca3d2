//! Generation context - the execution context threaded through a generation run

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::generation::Target;
use crate::infrastructure::templates::{
    EmbeddedTemplateLoader, TemplateError, TemplateGroup, TemplateGroupCache, TemplateGroupLoader,
};

/// State owned by one generation run.
///
/// Template groups are cached here rather than globally: requests made
/// through the same context share one parsed group per target, while
/// independent contexts (one per worker, say) never see each other's groups.
pub struct GenerationContext {
    loader: Arc<dyn TemplateGroupLoader>,
    templates: TemplateGroupCache,
}

impl GenerationContext {
    /// Create a context that builds template groups with `loader`
    pub fn new(loader: Arc<dyn TemplateGroupLoader>) -> Self {
        Self {
            loader,
            templates: TemplateGroupCache::new(),
        }
    }

    /// Create a context backed by the templates compiled into the binary
    pub fn embedded() -> Self {
        Self::new(Arc::new(EmbeddedTemplateLoader::new()))
    }

    /// Template group for `target`, built on first request in this context
    pub fn load_templates(&mut self, target: &dyn Target) -> Result<Arc<TemplateGroup>, TemplateError> {
        self.templates.get_or_load(target, self.loader.as_ref())
    }

    pub fn template_cache(&self) -> &TemplateGroupCache {
        &self.templates
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Render context used for template rendering
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: BTreeMap<String, JsonValue>,
}

impl RenderContext {
    /// Create a new render context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Check if a variable exists
    pub fn has_variable(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// Convert into the template engine's context type
    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_context_variables() {
        let mut context = RenderContext::new();
        context.add_variable("grammar_name", json!("Calc"));
        context.add_variable("rules", json!(["prog", "expr"]));

        assert!(context.has_variable("grammar_name"));
        assert!(!context.has_variable("tokens"));

        let tera_context = context.to_tera_context();
        assert_eq!(tera_context.get("grammar_name"), Some(&json!("Calc")));
        assert_eq!(tera_context.get("rules"), Some(&json!(["prog", "expr"])));
    }

    #[test]
    fn test_add_variable_overwrites() {
        let mut context = RenderContext::new();
        context.add_variable("version", json!("1"));
        context.add_variable("version", json!("2"));
        assert_eq!(context.variables.len(), 1);
        assert_eq!(context.variables["version"], json!("2"));
    }
}
