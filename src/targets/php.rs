//! PHP target adapter

use std::sync::Arc;

use crate::generation::escape::{
    JavaStringRenderer, StringRenderer, append_java_style_escaped_code_point, char_value_escape,
};
use crate::generation::reserved::ReservedWords;
use crate::generation::segments::{
    CLASS_FILE_LITERAL_LIMIT, MAX_BMP_ENCODING_WIDTH, segment_limit,
};
use crate::generation::{CapabilityFlags, Target, TargetIdentity};

/// Runtime version the generated PHP code is written against
pub const PHP_TARGET_VERSION: &str = "4.7.2";

#[rustfmt::skip]
pub const PHP_KEYWORDS: &[&str] = &[
    "abstract", "array",
    "bool", "break",
    "case", "catch", "class", "const", "continue",
    "default", "do",
    "else", "enum", "extends",
    "false", "finally", "float", "for", "foreach",
    "goto",
    "if", "implements", "instanceof", "int", "interface",
    "namespace", "new", "null",
    "object",
    "parent", "private", "protected", "public",
    "return",
    "static", "switch",
    "this", "throw", "true", "try",
    "use",
    "void",
    "while",
];

/// Names the generated recognizer uses for its own members
pub const GENERATOR_RESERVED: &[&str] = &["rule", "parserRule"];

const PHP_CAPABILITIES: CapabilityFlags = CapabilityFlags::new(
    false,
    segment_limit(CLASS_FILE_LITERAL_LIMIT, MAX_BMP_ENCODING_WIDTH),
);

/// Adapter for the PHP runtime
#[derive(Debug)]
pub struct PhpTarget {
    identity: TargetIdentity,
    reserved: ReservedWords,
}

impl PhpTarget {
    pub fn new() -> Self {
        Self {
            identity: TargetIdentity::new("Php", PHP_TARGET_VERSION),
            reserved: ReservedWords::new(PHP_KEYWORDS, GENERATOR_RESERVED),
        }
    }
}

impl Default for PhpTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for PhpTarget {
    fn identity(&self) -> &TargetIdentity {
        &self.identity
    }

    fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    fn capabilities(&self) -> CapabilityFlags {
        PHP_CAPABILITIES
    }

    fn string_renderer(&self) -> Arc<dyn StringRenderer> {
        Arc::new(JavaStringRenderer)
    }

    fn append_unicode_escaped_code_point(&self, code_point: u32, out: &mut String) {
        append_java_style_escaped_code_point(code_point, out);
    }

    // `$` starts variable interpolation in double-quoted PHP strings
    fn literal_char_escape(&self, code_point: u32) -> Option<&'static str> {
        match code_point {
            0x24 => Some("\\$"),
            _ => char_value_escape(code_point),
        }
    }
}
