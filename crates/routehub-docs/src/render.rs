//! Text rendering of OpenAPI documents.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use routehub_core::error::AppError;
use routehub_core::result::AppResult;

use crate::document::OpenApiDocument;

/// Output format for a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Indented YAML-like projection. Meant for display only.
    YamlLike,
}

impl RenderFormat {
    /// `Content-Type` header value for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::YamlLike => "text/yaml; charset=utf-8",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::YamlLike => write!(f, "yaml"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::YamlLike),
            other => Err(AppError::validation(format!(
                "Unsupported format '{other}': expected 'json' or 'yaml'"
            ))),
        }
    }
}

/// Render a document in the requested format.
pub fn render(document: &OpenApiDocument, format: RenderFormat) -> AppResult<String> {
    let value = serde_json::to_value(document)?;
    render_value(&value, format)
}

/// Render an arbitrary JSON value in the requested format.
pub fn render_value(value: &Value, format: RenderFormat) -> AppResult<String> {
    match format {
        RenderFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        RenderFormat::YamlLike => Ok(to_yaml_like(value)),
    }
}

/// YAML-like projection of a JSON value.
///
/// Strings are double-quoted with JSON escaping, empty containers render
/// as `[]` and `{}`. Output is not guaranteed to round-trip through a YAML
/// parser.
pub fn to_yaml_like(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) if !map.is_empty() => write_map(&mut out, map, 0),
        Value::Array(items) if !items.is_empty() => write_seq(&mut out, items, 0),
        scalar => {
            out.push_str(&inline(scalar));
            out.push('\n');
        }
    }
    out
}

fn write_map(out: &mut String, map: &Map<String, Value>, depth: usize) {
    let pad = "  ".repeat(depth);
    for (key, value) in map {
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                out.push_str(&format!("{pad}{key}:\n"));
                write_map(out, inner, depth + 1);
            }
            Value::Array(items) if !items.is_empty() => {
                out.push_str(&format!("{pad}{key}:\n"));
                write_seq(out, items, depth + 1);
            }
            other => out.push_str(&format!("{pad}{key}: {}\n", inline(other))),
        }
    }
}

fn write_seq(out: &mut String, items: &[Value], depth: usize) {
    let pad = "  ".repeat(depth);
    for item in items {
        let mut block = String::new();
        match item {
            Value::Object(inner) if !inner.is_empty() => write_map(&mut block, inner, depth + 1),
            Value::Array(inner) if !inner.is_empty() => write_seq(&mut block, inner, depth + 1),
            other => {
                out.push_str(&format!("{pad}- {}\n", inline(other)));
                continue;
            }
        }
        // The nested block starts two columns deeper than `pad`; the dash
        // takes those two columns on its first line.
        out.push_str(&pad);
        out.push_str("- ");
        out.push_str(&block[pad.len() + 2..]);
    }
}

/// Single-line form of a scalar or empty container.
fn inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => Value::String(s.clone()).to_string(),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}
