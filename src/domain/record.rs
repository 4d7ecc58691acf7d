//! Catalog record model and per-element validation.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Opaque record identifier.
///
/// The catalog may carry ids as JSON strings or numbers; both are kept in their
/// textual form so `1` and `"1"` address the same card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(number_text(n))),
            _ => None,
        }
    }
}

/// Largest magnitude an `f64` holds without losing integer precision.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Text form of a numeric id. Whole numbers written as floats (`1.0`, `1e2`)
/// read as integers, so they address the same card as `1` and `100`.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub code: String,
}

/// A catalog element that failed validation and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// Position of the element in the source array.
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{}: {}", self.index, self.reason)
    }
}

impl Record {
    /// Validate one element of the catalog array.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, MalformedRecord> {
        let malformed = |reason: String| MalformedRecord { index, reason };

        let Value::Object(fields) = value else {
            return Err(malformed(format!("expected an object, found {}", json_kind(value))));
        };

        let id = fields
            .get("id")
            .ok_or_else(|| malformed("missing field 'id'".to_string()))
            .and_then(|v| {
                RecordId::from_value(v).ok_or_else(|| {
                    malformed(format!(
                        "field 'id' must be a string or number, found {}",
                        json_kind(v)
                    ))
                })
            })?;
        let title = string_field(fields, "title").map_err(malformed)?;
        let body = string_field(fields, "body").map_err(malformed)?;
        let tags = tags_field(fields).map_err(malformed)?;
        let code = string_field(fields, "code").map_err(malformed)?;

        Ok(Self { id, title, body, tags, code })
    }

    /// Lower-cased text searched by the free-text query.
    pub fn haystack(&self) -> String {
        format!("{} {} {} {}", self.title, self.body, self.tags.join(" "), self.code)
            .to_lowercase()
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String, String> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("field '{}' must be a string, found {}", name, json_kind(other))),
        None => Err(format!("missing field '{}'", name)),
    }
}

fn tags_field(fields: &Map<String, Value>) -> Result<Vec<String>, String> {
    let items = match fields.get("tags") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(format!("field 'tags' must be an array, found {}", json_kind(other)));
        }
        None => return Err("missing field 'tags'".to_string()),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(format!("tags[{}] must be a string, found {}", i, json_kind(other))),
        })
        .collect()
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
