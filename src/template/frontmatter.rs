//! Split command templates into YAML frontmatter and body.
//!
//! Parsing is tolerant: a missing or malformed frontmatter block is reported
//! as [`Frontmatter::default`] with the whole input as body, never as an error.

use serde_yaml::Value;

/// Recognized frontmatter keys of a command template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// `argument-hint`
    pub argument_hint: Option<String>,
    /// `description`
    pub description: Option<String>,
}

/// A template split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Parse content into frontmatter (between the first `---` line and the next
/// `---` line) and body. Returns `None` if the delimiters are missing or the
/// block is not a YAML mapping.
pub fn parse_frontmatter_and_body(content: &str) -> Option<(Frontmatter, String)> {
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next()?;
    if opening.trim() != "---" {
        return None;
    }
    let block_start = opening.len();

    let mut offset = block_start;
    for line in lines {
        if line.trim() == "---" {
            let block = &content[block_start..offset];
            let body = &content[offset + line.len()..];
            return Some((parse_block(block)?, body.to_string()));
        }
        offset += line.len();
    }

    None
}

/// Parse a template, falling back to an empty frontmatter and the original
/// text as body when the frontmatter is absent or malformed.
pub fn parse_template(content: &str) -> ParsedTemplate {
    match parse_frontmatter_and_body(content) {
        Some((frontmatter, body)) => ParsedTemplate { frontmatter, body },
        None => ParsedTemplate {
            frontmatter: Frontmatter::default(),
            body: content.to_string(),
        },
    }
}

fn parse_block(block: &str) -> Option<Frontmatter> {
    if block.trim().is_empty() {
        return Some(Frontmatter::default());
    }

    let value: Value = serde_yaml::from_str(block).ok()?;
    if value.is_null() {
        return Some(Frontmatter::default());
    }
    value.as_mapping()?;

    Some(Frontmatter {
        argument_hint: get_str(&value, "argument-hint"),
        description: get_str(&value, "description"),
    })
}

/// Get a scalar value from a frontmatter mapping by key, rendered as a string.
fn get_str(value: &Value, key: &str) -> Option<String> {
    let mapping = value.as_mapping()?;
    let v = mapping.get(Value::String(key.to_string()))?;
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
