//! Renders a grammar's recognizer sources for one target

use std::path::PathBuf;

use tracing::{debug, info};

use crate::generation::rules::ensure_no_collisions;
use crate::generation::{Artifact, GenerationContext, GenerationError, GrammarModel, Target};
use crate::infrastructure::generation::build_recognizer_context;

/// Renders every template of a target's group into one artifact each.
///
/// The artifact for template `Parser.php` of grammar `Calc` is
/// `CalcParser.php`. Templates whose name starts with `_` are partials and
/// produce no artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecognizerRenderer;

impl RecognizerRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        target: &dyn Target,
        context: &mut GenerationContext,
        grammar: &GrammarModel,
    ) -> Result<Vec<Artifact>, GenerationError> {
        grammar.validate()?;
        ensure_no_collisions(target, grammar)?;

        let group = context.load_templates(target)?;
        let render_context = build_recognizer_context(target, grammar);

        let mut artifacts = Vec::new();
        for template in group.template_names() {
            if template.starts_with('_') {
                continue;
            }
            debug!(target_language = target.name(), template, "Rendering template");
            let content = group.render(template, &render_context)?;
            artifacts.push(Artifact {
                path: PathBuf::from(format!("{}{template}", grammar.name)),
                content,
            });
        }

        info!(
            grammar = %grammar.name,
            target_language = %target.identity(),
            artifacts = artifacts.len(),
            "Rendered recognizer"
        );
        Ok(artifacts)
    }
}
