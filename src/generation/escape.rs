//! String escaping strategies used when embedding grammar text in generated code
//!
//! Two layers of escaping meet here. Code-point escapes turn characters taken
//! from the grammar into escape sequences valid in the target's string
//! literals. Named string formats are applied by templates at render time
//! through the template group's `string` filter.

/// Format name understood by [`JavaStringRenderer`]
pub const JAVA_ESCAPE: &str = "java-escape";

/// Renders a string value under an optional named format.
///
/// Unknown formats are never an error: the value comes back as the default
/// formatting would produce it.
pub trait StringRenderer: Send + Sync {
    fn render(&self, value: &str, format: Option<&str>) -> String;
}

/// Formats every target understands: `upper`, `lower` and `cap`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStringRenderer;

impl StringRenderer for DefaultStringRenderer {
    fn render(&self, value: &str, format: Option<&str>) -> String {
        match format {
            Some("upper") => value.to_uppercase(),
            Some("lower") => value.to_lowercase(),
            Some("cap") => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            _ => value.to_string(),
        }
    }
}

/// Adds the `java-escape` format on top of [`DefaultStringRenderer`].
///
/// The template compiler would read a literal `\u` in generated text as the
/// start of a unicode escape, so the backslash is replaced by its own escape
/// (`\u005C`). Other backslash sequences are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaStringRenderer;

impl StringRenderer for JavaStringRenderer {
    fn render(&self, value: &str, format: Option<&str>) -> String {
        if format == Some(JAVA_ESCAPE) {
            // 5C is the hex code for the backslash itself
            return value.replace("\\u", "\\u005Cu");
        }

        DefaultStringRenderer.render(value, format)
    }
}

/// Escape-table entry for code points with a dedicated short escape
pub fn char_value_escape(code_point: u32) -> Option<&'static str> {
    match code_point {
        0x0A => Some("\\n"),
        0x0D => Some("\\r"),
        0x09 => Some("\\t"),
        0x08 => Some("\\b"),
        0x0C => Some("\\f"),
        0x5C => Some("\\\\"),
        0x22 => Some("\\\""),
        _ => None,
    }
}

/// Whether a code point must be written as a numeric escape inside a
/// double-quoted literal: control characters, the backslash, DEL and above.
/// Keeps generated sources 7-bit US-ASCII.
pub fn should_use_unicode_escape(code_point: u32) -> bool {
    code_point < 0x20 || code_point == 0x5C || code_point >= 0x7F
}

/// Appends `code_point` as a Java-style `\uXXXX` escape.
///
/// Supplementary code points have no single 16-bit escape and are written as
/// their UTF-16 surrogate pair. Values outside the Unicode range are written
/// with as many hex digits as they need.
pub fn append_java_style_escaped_code_point(code_point: u32, out: &mut String) {
    if (0x1_0000..=0x10_FFFF).contains(&code_point) {
        let offset = code_point - 0x1_0000;
        let high = 0xD800 + (offset >> 10);
        let low = 0xDC00 + (offset & 0x3FF);
        out.push_str(&format!("\\u{high:04X}\\u{low:04X}"));
    } else {
        out.push_str(&format!("\\u{code_point:04X}"));
    }
}
