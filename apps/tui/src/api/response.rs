//! Shaping of `{ "data": ... }` envelopes into typed results.

use std::num::FpCategory;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Array → all items, single object → one item, null or any falsy
    /// scalar → nothing.
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>, serde_json::Error> {
        match self.data {
            Value::Null | Value::Bool(false) => Ok(Vec::new()),
            Value::String(text) if text.is_empty() => Ok(Vec::new()),
            Value::Number(n) if n.as_f64().map(f64::classify) == Some(FpCategory::Zero) => {
                Ok(Vec::new())
            }
            Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
            other => Ok(vec![serde_json::from_value(other)?]),
        }
    }

    /// Only arrays count; anything else yields no rows.
    pub fn into_rows<T: DeserializeOwned>(self) -> Result<Vec<T>, serde_json::Error> {
        match self.data {
            Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
            _ => Ok(Vec::new()),
        }
    }

    /// First element of a `data` array.
    pub fn into_first<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        match self.data {
            Value::Array(items) => items
                .into_iter()
                .next()
                .map(serde_json::from_value)
                .transpose(),
            _ => Ok(None),
        }
    }

    pub fn into_object<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        match self.data {
            Value::Null => Ok(None),
            other => serde_json::from_value(other).map(Some),
        }
    }
}

/// The `detail` field of an error body, when the backend sends one.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
