//! Markdown → TOML conversion for TOML-reading assistants
//!
//! The emitted document has a `[metadata]` table (`name`, `description`,
//! `argument_hint`) and a `[prompt]` table whose `content` holds the
//! substituted body in a triple-quoted basic string.

use super::frontmatter::ParsedTemplate;
use super::substitution::{SubstitutionMode, substitute};

/// Convert a parsed command template into a TOML command document.
pub fn convert_md_to_toml(command: &str, template: &ParsedTemplate) -> String {
    let mut toml_content = String::from("[metadata]\n");
    toml_content.push_str(&format!("name = \"{}\"\n", escape_toml_string(command)));

    if let Some(desc) = template.frontmatter.description.as_deref() {
        toml_content.push_str(&format!("description = \"{}\"\n", escape_toml_string(desc)));
    }
    if let Some(hint) = template.frontmatter.argument_hint.as_deref() {
        toml_content.push_str(&format!(
            "argument_hint = \"{}\"\n",
            escape_toml_string(hint)
        ));
    }

    let body = substitute(&template.body, SubstitutionMode::Toml);
    toml_content.push_str(&format!(
        "\n[prompt]\ncontent = \"\"\"{}\"\"\"\n",
        escape_toml_string(&body)
    ));

    toml_content
}

/// Escape a string for use inside a TOML basic string (quotes not included).
///
/// Backslashes are handled in the same pass as every other character, so
/// escapes introduced for `\n`, `\t` and `"` are never escaped again.
/// Control characters TOML forbids in basic strings become `\uXXXX`.
pub fn escape_toml_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '"' => escaped.push_str("\\\""),
            '\r' => escaped.push_str("\\r"),
            '\x00'..='\x08' | '\x0B' | '\x0C' | '\x0E'..='\x1F' | '\x7F' => {
                escaped.push_str(&format!("\\u{:04X}", c as u32));
            }
            _ => escaped.push(c),
        }
    }

    escaped
}
