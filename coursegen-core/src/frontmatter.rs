//! Frontmatter parsing from markdown files.

use coursegen_types::Attributes;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("YAML is not representable as JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Frontmatter must be a mapping")]
    NotAMapping,
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^\x{feff}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|$)(.*)$")
            .expect("frontmatter regex is valid")
    })
}

/// Split frontmatter from markdown content
///
/// Returns a tuple of (attributes, markdown_body).
/// If no frontmatter is present, returns an empty map with the full content as body.
///
/// # Example
///
/// ```
/// use coursegen_core::frontmatter::parse_frontmatter;
///
/// let content = "---\nhint: Count carefully\n---\nWhat is 2+2?\n";
///
/// let (attrs, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(attrs["hint"], "Count carefully");
/// assert_eq!(body, "What is 2+2?\n");
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(Attributes, String), FrontmatterError> {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return Ok((Attributes::new(), content.to_string()));
    };

    let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

    let attributes = match yaml_str_to_value(yaml)? {
        Value::Null => Attributes::new(),
        Value::Object(map) => map,
        _ => return Err(FrontmatterError::NotAMapping),
    };

    Ok((attributes, body.to_string()))
}

/// Parse YAML text into a JSON-compatible value
pub fn yaml_str_to_value(yaml: &str) -> Result<Value, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Value::Null);
    }
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    Ok(serde_json::to_value(value)?)
}

/// Scalar attribute as text; empty strings count as absent
pub fn attr_string(attrs: &Attributes, key: &str) -> Option<String> {
    scalar_to_string(attrs.get(key)?).filter(|s| !s.is_empty())
}

/// List attribute as text; a lone scalar is treated as a one-element list
pub fn attr_string_list(attrs: &Attributes, key: &str) -> Vec<String> {
    match attrs.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
