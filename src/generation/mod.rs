//! Generation domain module - the target adaptation contract
//!
//! This module defines what an output-language adapter must provide to the
//! shared rendering pipeline: identity, collision checks against a reserved
//! word set, string escaping, and capability flags. The pipeline itself stays
//! language agnostic and asks the adapter whenever target rules matter.

pub mod context;
pub mod errors;
pub mod escape;
pub mod grammar;
pub mod reserved;
pub mod rules;
pub mod segments;
pub mod traits;
pub mod types;

pub use context::*;
pub use errors::*;
pub use grammar::*;
pub use traits::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::escape::{JAVA_ESCAPE, JavaStringRenderer, StringRenderer};
    use crate::generation::reserved::ReservedWords;
    use std::sync::Arc;

    /// Minimal adapter for a language whose only keywords are `class` and `new`
    struct TinyTarget {
        identity: TargetIdentity,
        reserved: ReservedWords,
    }

    impl TinyTarget {
        fn new() -> Self {
            Self {
                identity: TargetIdentity::new("Tiny", "0.1.0"),
                reserved: ReservedWords::new(&["class", "new"], &[]),
            }
        }
    }

    impl Target for TinyTarget {
        fn identity(&self) -> &TargetIdentity {
            &self.identity
        }

        fn reserved_words(&self) -> &ReservedWords {
            &self.reserved
        }

        fn capabilities(&self) -> CapabilityFlags {
            CapabilityFlags::new(true, 4)
        }

        fn string_renderer(&self) -> Arc<dyn StringRenderer> {
            Arc::new(JavaStringRenderer)
        }

        fn append_unicode_escaped_code_point(&self, code_point: u32, out: &mut String) {
            out.push_str(&format!("\\x{{{code_point:x}}}"));
        }
    }

    #[test]
    fn test_collision_scenario() {
        let target = TinyTarget::new();
        assert!(target.would_collide("class"));
        assert!(target.would_collide("new"));
        assert!(!target.would_collide("myRule"));
        assert!(!target.would_collide("rule"));
    }

    #[test]
    fn test_default_methods_read_capabilities() {
        let target = TinyTarget::new();
        assert_eq!(target.name(), "Tiny");
        assert_eq!(target.version(), "0.1.0");
        assert!(target.supports_overloaded_methods());
        assert_eq!(target.serialized_segment_limit(), 4);
    }

    #[test]
    fn test_render_string_uses_target_renderer() {
        let target = TinyTarget::new();
        assert_eq!(
            target.render_string("a\\ub", Some(JAVA_ESCAPE)),
            "a\\u005Cub"
        );
        assert_eq!(target.render_string("a\\ub", Some("unknown")), "a\\ub");
    }

    #[test]
    fn test_target_string_literal_uses_target_escape_style() {
        let target = TinyTarget::new();
        assert_eq!(target.target_string_literal("é", false), "\\x{e9}");
        assert_eq!(
            target.target_string_literal("'a'\n", true),
            "\"'a'\\n\""
        );
    }
}
