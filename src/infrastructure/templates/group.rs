//! Tera-backed template groups

use std::collections::HashMap;
use std::sync::Arc;

use tera::{Tera, Value};

use crate::generation::RenderContext;
use crate::generation::escape::StringRenderer;
use crate::infrastructure::templates::TemplateError;

/// Name of the filter templates use to apply a string format:
/// `{{ value | string(format="java-escape") }}`
pub const STRING_FILTER: &str = "string";

/// Suffix of template sources; stripped from template names
pub const TEMPLATE_SUFFIX: &str = ".tera";

/// Parsed templates of one target plus the renderers registered on them
pub struct TemplateGroup {
    name: String,
    tera: Tera,
    has_string_renderer: bool,
}

impl TemplateGroup {
    /// Parse `sources` (template name, template text) into a group.
    ///
    /// A group without templates is reported as not found.
    pub fn from_sources<I>(name: &str, sources: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let sources: Vec<(String, String)> = sources
            .into_iter()
            .map(|(template, content)| {
                let template = template
                    .strip_suffix(TEMPLATE_SUFFIX)
                    .map(str::to_string)
                    .unwrap_or(template);
                (template, content)
            })
            .collect();

        if sources.is_empty() {
            return Err(TemplateError::not_found(name));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;

        tracing::debug!(
            group = name,
            templates = tera.get_template_names().count(),
            "Parsed template group"
        );

        Ok(Self {
            name: name.to_string(),
            tera,
            has_string_renderer: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Make `renderer` available to templates as the `string` filter
    pub fn register_renderer(&mut self, renderer: Arc<dyn StringRenderer>) {
        self.tera
            .register_filter(STRING_FILTER, StringFilter { renderer });
        self.has_string_renderer = true;
    }

    pub fn has_string_renderer(&self) -> bool {
        self.has_string_renderer
    }

    /// Template names in sorted order
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    pub fn render(&self, template: &str, context: &RenderContext) -> Result<String, TemplateError> {
        Ok(self.tera.render(template, &context.to_tera_context())?)
    }
}

impl std::fmt::Debug for TemplateGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateGroup")
            .field("name", &self.name)
            .field("templates", &self.template_names())
            .field("has_string_renderer", &self.has_string_renderer)
            .finish()
    }
}

/// Adapts a [`StringRenderer`] to Tera's filter interface
struct StringFilter {
    renderer: Arc<dyn StringRenderer>,
}

impl tera::Filter for StringFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let format = args.get("format").and_then(Value::as_str);
        let rendered = match value {
            Value::String(text) => self.renderer.render(text, format),
            other => self.renderer.render(&other.to_string(), format),
        };
        Ok(Value::String(rendered))
    }
}
