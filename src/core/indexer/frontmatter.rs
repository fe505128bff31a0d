//! Front matter splitting.
//!
//! A document may open with a metadata block fenced by `---` (YAML)
//! or `+++` (TOML) lines. The block is parsed into a JSON-compatible
//! map and the remainder of the document is returned as the body.
//! Documents without a block are returned untouched.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::error::{MdIndexError, Result};

const YAML_DELIMITER: &str = "---";
const TOML_DELIMITER: &str = "+++";

/// Metadata syntax of a front matter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    Yaml,
    Toml,
}

impl FrontMatterFormat {
    fn delimiter(self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => YAML_DELIMITER,
            FrontMatterFormat::Toml => TOML_DELIMITER,
        }
    }

    fn from_opening_line(line: &str) -> Option<Self> {
        match line.trim_end() {
            YAML_DELIMITER => Some(FrontMatterFormat::Yaml),
            TOML_DELIMITER => Some(FrontMatterFormat::Toml),
            _ => None,
        }
    }
}

/// Parsed front matter fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// The `title` field, if present
    pub fn title(&self) -> Option<&Value> {
        self.fields.get("title")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a raw document into front matter and body
///
/// # Errors
///
/// Returns [`MdIndexError::FrontMatter`] when an opening delimiter
/// has no matching closing line, when the block does not parse, or
/// when it is not a key/value mapping.
///
/// # Example
///
/// ```
/// use mdindex::core::indexer::frontmatter::split;
///
/// let (meta, body) = split("---\ntitle: Intro\n---\n# Hello").unwrap();
/// assert_eq!(meta.title().and_then(|t| t.as_str()), Some("Intro"));
/// assert_eq!(body, "# Hello");
/// ```
pub fn split(raw: &str) -> Result<(FrontMatter, &str)> {
    let content = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(opening) = content.split_inclusive('\n').next() else {
        return Ok((FrontMatter::default(), raw));
    };
    let Some(format) = FrontMatterFormat::from_opening_line(opening) else {
        return Ok((FrontMatter::default(), raw));
    };

    let rest = &content[opening.len()..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == format.delimiter() {
            let fields = parse_block(&rest[..offset], format)?;
            let body = &rest[offset + line.len()..];
            return Ok((FrontMatter { fields }, body));
        }
        offset += line.len();
    }

    Err(MdIndexError::FrontMatter(format!(
        "missing closing '{}' delimiter",
        format.delimiter()
    )))
}

/// Parse the text between the delimiters into a map
fn parse_block(block: &str, format: FrontMatterFormat) -> Result<BTreeMap<String, Value>> {
    if block.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let value = match format {
        FrontMatterFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(block)
                .map_err(|e| MdIndexError::FrontMatter(format!("invalid YAML: {e}")))?;
            serde_json::to_value(yaml)
        }
        FrontMatterFormat::Toml => {
            let toml: toml::Value = toml::from_str(block)
                .map_err(|e| MdIndexError::FrontMatter(format!("invalid TOML: {e}")))?;
            serde_json::to_value(toml)
        }
    }
    .map_err(|e| MdIndexError::FrontMatter(format!("unsupported value: {e}")))?;

    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        // A block holding only comments
        Value::Null => Ok(BTreeMap::new()),
        other => Err(MdIndexError::FrontMatter(format!(
            "expected key/value pairs, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
