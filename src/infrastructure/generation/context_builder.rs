//! Builds the render context for a grammar, asking the target for every
//! language-specific detail

use serde_json::json;

use crate::generation::segments::split_segments;
use crate::generation::{GrammarModel, RenderContext, Target};

/// Build the variables recognizer templates are rendered with
pub fn build_recognizer_context(target: &dyn Target, grammar: &GrammarModel) -> RenderContext {
    let mut context = RenderContext::new();

    context.add_variable("grammar_name", json!(grammar.name));
    context.add_variable("target_name", json!(target.name()));
    context.add_variable("target_version", json!(target.version()));
    context.add_variable("generator_version", json!(env!("CARGO_PKG_VERSION")));
    context.add_variable(
        "supports_overloaded_methods",
        json!(target.supports_overloaded_methods()),
    );

    // Token type 0 is reserved for the invalid token
    let tokens: Vec<_> = grammar
        .tokens
        .iter()
        .enumerate()
        .map(|(index, name)| json!({ "name": name, "type": index + 1 }))
        .collect();
    context.add_variable("tokens", json!(tokens));

    let rules: Vec<_> = grammar
        .rules
        .iter()
        .enumerate()
        .map(|(index, name)| json!({ "name": name, "index": index }))
        .collect();
    context.add_variable("rules", json!(rules));

    let literal_names: Vec<String> = grammar
        .literal_names
        .iter()
        .map(|literal| target.target_string_literal(literal, true))
        .collect();
    context.add_variable("literal_names", json!(literal_names));

    let limit = target.serialized_segment_limit();
    let segments: Vec<String> = split_segments(&grammar.serialized_atn, limit)
        .into_iter()
        .map(|segment| {
            segment
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    tracing::debug!(
        target_language = target.name(),
        entries = grammar.serialized_atn.len(),
        segments = segments.len(),
        limit,
        "Segmented serialized ATN"
    );
    context.add_variable("serialized_segment_limit", json!(limit));
    context.add_variable("atn_length", json!(grammar.serialized_atn.len()));
    context.add_variable("atn_segments", json!(segments));

    context
}
