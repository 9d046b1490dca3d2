//! Port interfaces for the generation domain

use std::sync::Arc;

use crate::generation::escape::{StringRenderer, char_value_escape, should_use_unicode_escape};
use crate::generation::reserved::ReservedWords;
use crate::generation::{CapabilityFlags, TargetIdentity};

/// Contract every output-language adapter satisfies.
///
/// The rendering pipeline never matches on a language: anything that differs
/// between targets is answered by one of these methods. Adapters are shared
/// across generation runs, so they hold no per-run state.
pub trait Target: Send + Sync {
    /// Language tag and runtime version
    fn identity(&self) -> &TargetIdentity;

    /// Identifiers that must not appear verbatim in generated code
    fn reserved_words(&self) -> &ReservedWords;

    fn capabilities(&self) -> CapabilityFlags;

    /// Renderer registered on this target's template group
    fn string_renderer(&self) -> Arc<dyn StringRenderer>;

    /// Append `code_point` in the target's numeric escape syntax
    fn append_unicode_escaped_code_point(&self, code_point: u32, out: &mut String);

    /// Short escape for `code_point` inside a double-quoted literal, if the
    /// target's literal syntax has one
    fn literal_char_escape(&self, code_point: u32) -> Option<&'static str> {
        char_value_escape(code_point)
    }

    fn name(&self) -> &str {
        self.identity().name()
    }

    fn version(&self) -> &str {
        self.identity().version()
    }

    /// Whether a grammar symbol would clash with the target language or the
    /// generator's own identifiers if emitted as is
    fn would_collide(&self, symbol: &str) -> bool {
        self.reserved_words().contains(symbol)
    }

    fn supports_overloaded_methods(&self) -> bool {
        self.capabilities().supports_overloaded_methods
    }

    fn serialized_segment_limit(&self) -> usize {
        self.capabilities().serialized_segment_limit
    }

    /// Apply a named string format the way templates do
    fn render_string(&self, value: &str, format: Option<&str>) -> String {
        self.string_renderer().render(value, format)
    }

    /// Convert `text` into the body of a target string literal, wrapped in
    /// double quotes when `quoted` is set.
    ///
    /// Characters with a short escape in [`Target::literal_char_escape`] use it
    /// (single quotes are kept as they are); control characters and anything
    /// outside printable ASCII use the target's numeric escape.
    fn target_string_literal(&self, text: &str, quoted: bool) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        if quoted {
            out.push('"');
        }
        for ch in text.chars() {
            let code_point = ch as u32;
            if let Some(escape) = self.literal_char_escape(code_point) {
                out.push_str(escape);
            } else if should_use_unicode_escape(code_point) {
                self.append_unicode_escaped_code_point(code_point, &mut out);
            } else {
                out.push(ch);
            }
        }
        if quoted {
            out.push('"');
        }
        out
    }
}
