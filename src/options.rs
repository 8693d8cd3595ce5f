use serde::{Deserialize, Serialize};

/// Options for [`build_variables`](crate::build_variables)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableOptions {
    /// Namespace prepended to every generated variable name
    pub prefix: String,
    /// Embed the literal token value as a `var()` fallback
    pub include_fallback: bool,
    /// Keys that collapse onto the accumulated name instead of extending it
    /// (e.g. `"DEFAULT"`)
    pub root_keys: Vec<String>,
}

impl VariableOptions {
    /// Check whether a raw key is configured as a root key
    pub fn is_root_key(&self, key: &str) -> bool {
        self.root_keys.iter().any(|k| k == key)
    }
}

/// Options for [`flatten_variables`](crate::flatten_variables)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Separator joining nested keys into a flat key
    pub separator: String,
    /// Prefix prepended once to every emitted flat key; it does not
    /// participate in the nesting logic
    pub prefix: String,
    /// Keys that collapse onto the accumulated key instead of extending it
    pub root_keys: Vec<String>,
}

impl FlattenOptions {
    /// Check whether a raw key is configured as a root key
    pub fn is_root_key(&self, key: &str) -> bool {
        self.root_keys.iter().any(|k| k == key)
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            separator: "-".to_string(),
            prefix: String::new(),
            root_keys: Vec::new(),
        }
    }
}
