//! Rich-text fragments attached to record fields.
//!
//! A fragment holds either nothing or a restricted Markdown string. Input data
//! may also describe a fragment structurally as a JSON list: plain strings are
//! paragraphs and nested lists are bullet groups. The structured form is
//! converted to Markdown once, when the fragment is constructed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FragmentError {
    #[error("cannot construct a fragment from {0}")]
    UnsupportedValue(&'static str),
    #[error("cannot construct a bullet item from {0}")]
    UnsupportedListItem(&'static str),
}

/// A restricted-Markdown value that may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(Option<String>);

impl Fragment {
    /// Wraps a Markdown string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// The absent fragment. Renders as nothing in every backend.
    pub fn absent() -> Self {
        Self(None)
    }

    /// True when the fragment is absent or holds only whitespace.
    pub fn is_empty(&self) -> bool {
        self.0.as_deref().is_none_or(|s| s.trim().is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Builds a fragment from a loosely-typed JSON value.
    ///
    /// Strings are taken verbatim, numbers and booleans are stringified, `null`
    /// is the absent fragment and lists are converted to Markdown blocks:
    /// strings become paragraphs, nested lists become bullet groups. Strings
    /// inside a list are inline text, so a leading `1.` or `#` stays literal.
    pub fn from_value(value: &Value) -> Result<Self, FragmentError> {
        match value {
            Value::Null => Ok(Self::absent()),
            Value::String(s) => Ok(Self::new(s.as_str())),
            Value::Number(n) => Ok(Self::new(n.to_string())),
            Value::Bool(b) => Ok(Self::new(b.to_string())),
            Value::Array(items) => blocks_to_markdown(items).map(Self::new),
            Value::Object(_) => Err(FragmentError::UnsupportedValue("a map")),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Option<String>> for Fragment {
    fn from(s: Option<String>) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for Fragment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Fragment::from_value(&value).map_err(serde::de::Error::custom)
    }
}

// Consecutive bullet groups switch markers so Markdown keeps them apart.
const BULLETS: [char; 3] = ['-', '*', '+'];

fn blocks_to_markdown(items: &[Value]) -> Result<String, FragmentError> {
    let mut blocks = Vec::with_capacity(items.len());
    let mut groups = 0;
    for item in items {
        match item {
            Value::Array(bullets) => {
                let mut lines = Vec::with_capacity(bullets.len());
                collect_bullets(bullets, &mut lines, 0)?;
                if lines.is_empty() {
                    continue;
                }
                let marker = BULLETS[groups % BULLETS.len()];
                groups += 1;
                let lines: Vec<String> = lines
                    .iter()
                    .map(|line| format!("{} {}", marker, line))
                    .collect();
                blocks.push(lines.join("\n"));
            }
            other => {
                if let Some(text) = scalar_text(other)?.map(|text| inline_only(&text)) {
                    if !text.is_empty() {
                        blocks.push(text);
                    }
                }
            }
        }
    }
    Ok(blocks.join("\n\n"))
}

// Lists nested deeper than one bullet level are flattened into the enclosing group.
fn collect_bullets(
    items: &[Value],
    lines: &mut Vec<String>,
    depth: usize,
) -> Result<(), FragmentError> {
    for item in items {
        match item {
            Value::Array(nested) => {
                log::warn!(
                    "Bullet list nested {} levels deep; flattening it into the enclosing list.",
                    depth + 2
                );
                collect_bullets(nested, lines, depth + 1)?;
            }
            Value::Object(_) => return Err(FragmentError::UnsupportedListItem("a map")),
            other => {
                if let Some(text) = scalar_text(other)?.map(|text| inline_only(&text)) {
                    if !text.is_empty() {
                        lines.push(text);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Folds `text` onto one line and escapes a leading block marker, so Markdown
/// reads it as inline content only.
fn inline_only(text: &str) -> String {
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = line.chars();
    let escape_at = match chars.next() {
        Some('#' | '>' | '<') => Some(0),
        Some(c @ ('-' | '+' | '*' | '_')) => {
            let rest = chars.as_str();
            let is_rule = rest.chars().all(|r| r == c || r == ' ');
            (rest.is_empty() || rest.starts_with(' ') || is_rule).then_some(0)
        }
        Some('`') if line.starts_with("```") => Some(0),
        Some('~') if line.starts_with("~~~") => Some(0),
        Some('[') if line.contains("]:") => Some(0),
        Some(c) if c.is_ascii_digit() => ordered_marker(&line),
        _ => None,
    };
    match escape_at {
        Some(at) => format!("{}\\{}", &line[..at], &line[at..]),
        None => line,
    }
}

/// Byte offset of the `.` or `)` in a line starting like `12. ` or `3)`.
fn ordered_marker(line: &str) -> Option<usize> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 9 {
        return None;
    }
    let rest = &line[digits..];
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('.' | ')'), None | Some(' ')) => Some(digits),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Result<Option<String>, FragmentError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Object(_) => Err(FragmentError::UnsupportedValue("a map")),
        Value::Array(_) => Err(FragmentError::UnsupportedValue("a list")),
    }
}
