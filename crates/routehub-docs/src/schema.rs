//! Schema inference from JSON values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// An OpenAPI-style schema fragment.
///
/// Only the keywords produced by inference are modelled. A schema with every
/// field unset serializes to `{}` (accept anything).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// JSON type name (`null`, `string`, `integer`, `number`, `boolean`,
    /// `array`, `object`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Sample value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Element schema of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Member schemas of an object, in source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
}

impl Schema {
    /// A schema carrying only a type name.
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Default::default()
        }
    }

    /// Attach a sample value.
    #[must_use]
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Schema for a string with the given sample.
    pub fn string_example(example: impl Into<String>) -> Self {
        Self::of_type("string").with_example(Value::String(example.into()))
    }
}

/// Infer a schema fragment for a JSON value.
///
/// Arrays are described by their first element only; an empty array gets
/// an unconstrained `items` schema.
pub fn infer(value: &Value) -> Schema {
    match value {
        Value::Null => Schema::of_type("null"),
        Value::String(s) => Schema::string_example(s.clone()),
        Value::Number(n) => Schema::of_type(number_type(n)).with_example(value.clone()),
        Value::Bool(_) => Schema::of_type("boolean").with_example(value.clone()),
        Value::Array(items) => Schema {
            items: Some(Box::new(items.first().map(infer).unwrap_or_default())),
            ..Schema::of_type("array")
        },
        Value::Object(map) => Schema {
            properties: Some(infer_properties(map)),
            ..Schema::of_type("object")
        },
    }
}

/// Infer member schemas for every key of an object, keeping key order.
pub fn infer_properties(map: &Map<String, Value>) -> IndexMap<String, Schema> {
    map.iter().map(|(k, v)| (k.clone(), infer(v))).collect()
}

fn number_type(n: &Number) -> &'static str {
    if n.is_i64() || n.is_u64() {
        return "integer";
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => "integer",
        _ => "number",
    }
}
