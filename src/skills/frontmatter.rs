//! YAML frontmatter extraction for SKILL.md.

use serde_yaml::{Mapping, Value};

pub const DELIMITER: &str = "---";

/// Result of looking for a frontmatter block at the top of SKILL.md.
#[derive(Debug, Clone, PartialEq)]
pub enum Frontmatter {
    /// Content doesn't start with the delimiter.
    Missing,
    /// Opening delimiter without a closing one.
    Malformed,
    /// The header isn't valid YAML.
    InvalidYaml(String),
    /// Valid YAML that isn't a key-value mapping.
    NotAMapping,
    Parsed(Mapping),
}

/// Split `content` on the delimiter into at most three parts and parse the
/// middle one.
pub fn parse_frontmatter(content: &str) -> Frontmatter {
    if !content.starts_with(DELIMITER) {
        return Frontmatter::Missing;
    }

    let parts: Vec<&str> = content.splitn(3, DELIMITER).collect();
    if parts.len() < 3 {
        return Frontmatter::Malformed;
    }

    match serde_yaml::from_str::<Value>(parts[1]) {
        Ok(Value::Mapping(fields)) => Frontmatter::Parsed(fields),
        Ok(_) => Frontmatter::NotAMapping,
        Err(e) => Frontmatter::InvalidYaml(e.to_string()),
    }
}

/// A frontmatter field rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Text(String),
    /// Present but not representable as text (null, list, mapping).
    Unsupported,
}

/// Look up `key`. Strings are returned as-is; with `stringify_scalars`,
/// numbers and booleans are rendered too.
pub fn field(fields: &Mapping, key: &str, stringify_scalars: bool) -> FieldValue {
    match fields.get(key) {
        None => FieldValue::Absent,
        Some(Value::String(s)) => FieldValue::Text(s.clone()),
        Some(Value::Number(n)) if stringify_scalars => FieldValue::Text(n.to_string()),
        Some(Value::Bool(b)) if stringify_scalars => FieldValue::Text(b.to_string()),
        Some(_) => FieldValue::Unsupported,
    }
}
