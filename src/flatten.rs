use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{child_path, json_type_name, Error, Result};
use crate::options::FlattenOptions;

/// Flatten a nested token tree into a single-level map.
///
/// Nested keys are joined with `options.separator`; a key listed in
/// `options.root_keys` reuses the accumulated key verbatim instead of
/// extending it. `options.prefix` is prepended once to each emitted key and
/// takes no part in the joining. Unlike [`build_variables`](crate::build_variables),
/// keys are joined raw, without kebab-case canonicalization.
///
/// Array values are skipped entirely and contribute no entries; scalar
/// values that are not strings fail fast with [`Error::InvalidLeaf`]. When
/// two paths produce the same flat key, the later-traversed one wins.
pub fn flatten_variables(
    tree: &Map<String, Value>,
    options: &FlattenOptions,
) -> Result<Map<String, Value>> {
    let mut flat = Map::new();
    walk(tree, "", "", options, &mut flat)?;
    Ok(flat)
}

fn walk(
    tree: &Map<String, Value>,
    prefix: &str,
    path: &str,
    options: &FlattenOptions,
    flat: &mut Map<String, Value>,
) -> Result<()> {
    for (key, value) in tree {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else if options.is_root_key(key) {
            prefix.to_string()
        } else {
            format!("{prefix}{}{key}", options.separator)
        };

        match value {
            Value::String(literal) => {
                trace!(key = %full_key, value = %literal, "emitting flat entry");
                flat.insert(
                    format!("{}{full_key}", options.prefix),
                    Value::String(literal.clone()),
                );
            }
            Value::Object(subtree) => {
                walk(subtree, &full_key, &child_path(path, key), options, flat)?;
            }
            Value::Array(_) => {
                trace!(key = %full_key, "skipping array value");
            }
            other => {
                return Err(Error::InvalidLeaf {
                    path: child_path(path, key),
                    found: json_type_name(other),
                });
            }
        }
    }

    Ok(())
}
