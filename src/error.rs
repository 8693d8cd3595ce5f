use serde_json::Value;
use thiserror::Error;

/// Alias for results produced by this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while walking a token tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A tree position held something that is neither a string leaf nor a
    /// nested object. The walk aborts without emitting partial results.
    #[error("invalid leaf at `{path}`: expected a string or a nested object, found {found}")]
    InvalidLeaf {
        /// Dotted path of raw keys from the root to the offending node
        path: String,
        /// Human-readable name of the JSON type actually found
        found: &'static str,
    },
}

/// Name a JSON value's type for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extend a dotted key path by one raw key
pub(crate) fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
