use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters of a badge URL, kept sorted by key.
pub type QueryParams = BTreeMap<String, String>;

/// Value of one query parameter as edited in the query string builder.
///
/// Example definitions describe flag parameters (present or absent, no
/// value) with JSON `null` or a boolean; everything else is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum QueryParamValue {
    Text(String),
    Flag(bool),
}

impl QueryParamValue {
    pub fn is_flag(&self) -> bool {
        matches!(self, QueryParamValue::Flag(_))
    }
}

impl From<serde_json::Value> for QueryParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => QueryParamValue::Flag(true),
            serde_json::Value::Bool(b) => QueryParamValue::Flag(b),
            serde_json::Value::String(s) => QueryParamValue::Text(s),
            other => QueryParamValue::Text(other.to_string()),
        }
    }
}

impl From<QueryParamValue> for serde_json::Value {
    fn from(value: QueryParamValue) -> Self {
        match value {
            QueryParamValue::Text(s) => serde_json::Value::String(s),
            QueryParamValue::Flag(true) => serde_json::Value::Null,
            QueryParamValue::Flag(false) => serde_json::Value::Bool(false),
        }
    }
}

/// Collapse edited values into the parameters that belong in a URL.
///
/// Empty text and unchecked flags are dropped; a checked flag is kept with
/// an empty value.
pub fn build_query_params(values: &BTreeMap<String, QueryParamValue>) -> QueryParams {
    values
        .iter()
        .filter_map(|(name, value)| match value {
            QueryParamValue::Text(text) if !text.is_empty() => Some((name.clone(), text.clone())),
            QueryParamValue::Flag(true) => Some((name.clone(), String::new())),
            _ => None,
        })
        .collect()
}

/// Render `key=value` pairs joined by `&`, percent-encoding keys and values.
pub fn to_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
