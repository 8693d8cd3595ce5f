use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::casing::to_kebab_case;
use crate::error::{child_path, json_type_name, Error, Result};
use crate::options::VariableOptions;

/// Result of building variables from a token tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSet {
    /// Generated variable name (without `--` or `var()` wrapping) to its
    /// literal token value. Later leaves overwrite earlier ones when two
    /// paths generate the same name.
    pub declarations: Map<String, Value>,
    /// Mirror of the input tree with every leaf replaced by a `var()`
    /// reference to its generated variable
    pub references: Map<String, Value>,
    /// The input tree, unchanged
    pub raw: Map<String, Value>,
}

/// Walk a nested token tree and generate CSS custom property names for
/// every string leaf.
///
/// Each key segment is canonicalized with [`to_kebab_case`] and joined with
/// hyphens onto `options.prefix`. A key listed in `options.root_keys`
/// contributes no segment of its own: its value (or subtree) reuses the
/// accumulated name verbatim, so `{ "text": { "DEFAULT": "#111" } }` with
/// root key `"DEFAULT"` declares `text` rather than `text-default`.
///
/// Values must be strings or nested objects; anything else, arrays
/// included, fails fast with [`Error::InvalidLeaf`]. The input is never
/// mutated and comes back as [`VariableSet::raw`].
pub fn build_variables(
    tree: &Map<String, Value>,
    options: &VariableOptions,
) -> Result<VariableSet> {
    let mut declarations = Map::new();
    let mut references = Map::new();

    walk(
        tree,
        &options.prefix,
        "",
        options,
        &mut declarations,
        &mut references,
    )?;

    Ok(VariableSet {
        declarations,
        references,
        raw: tree.clone(),
    })
}

/// Depth-first pre-order walk in the tree's own enumeration order
fn walk(
    tree: &Map<String, Value>,
    prefix: &str,
    path: &str,
    options: &VariableOptions,
    declarations: &mut Map<String, Value>,
    references: &mut Map<String, Value>,
) -> Result<()> {
    for (key, value) in tree {
        let cased = to_kebab_case(key);
        let full_name = if options.is_root_key(key) {
            prefix.to_string()
        } else if prefix.is_empty() {
            cased.clone()
        } else {
            format!("{prefix}-{cased}")
        };

        match value {
            Value::String(literal) => {
                trace!(name = %full_name, value = %literal, "declaring variable");
                let expression =
                    reference_expression(&full_name, literal, options.include_fallback);
                declarations.insert(full_name, Value::String(literal.clone()));
                references.insert(key.clone(), Value::String(expression));
            }
            Value::Object(subtree) => {
                // A root key skips its own segment but never erases an
                // already-established namespace for its descendants.
                let child_prefix = if prefix.is_empty() { cased } else { full_name };
                let mut nested = Map::new();
                walk(
                    subtree,
                    &child_prefix,
                    &child_path(path, key),
                    options,
                    declarations,
                    &mut nested,
                )?;
                references.insert(key.clone(), Value::Object(nested));
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

/// Format a `var()` expression over a generated name
fn reference_expression(name: &str, literal: &str, include_fallback: bool) -> String {
    if include_fallback {
        format!("var(--{name}, {literal})")
    } else {
        format!("var(--{name})")
    }
}
