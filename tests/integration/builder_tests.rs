//! Integration tests for variable building over realistic token trees

use css_token_vars::{build_variables, VariableOptions};
use serde_json::{json, Map, Value};

/// Build the token tree used across the end-to-end tests
fn sample_tokens() -> Map<String, Value> {
    json!({
        "text": { "DEFAULT": "#111", "muted": "#333" },
        "border": "#999",
        "spacing": { "sm": "0.25rem", "md": "0.5rem", "lg": "1rem" },
    })
    .as_object()
    .unwrap()
    .clone()
}

/// Options matching the documented end-to-end example
fn sample_options() -> VariableOptions {
    VariableOptions {
        prefix: "my-prefix".to_string(),
        include_fallback: true,
        root_keys: vec!["DEFAULT".to_string()],
    }
}

#[test]
fn test_end_to_end_declarations() {
    let set = build_variables(&sample_tokens(), &sample_options()).unwrap();

    assert_eq!(set.declarations["my-prefix-text"], "#111");
    assert_eq!(set.declarations["my-prefix-text-muted"], "#333");
    assert_eq!(set.declarations["my-prefix-border"], "#999");
    assert_eq!(set.declarations["my-prefix-spacing-sm"], "0.25rem");
    assert_eq!(set.declarations["my-prefix-spacing-md"], "0.5rem");
    assert_eq!(set.declarations["my-prefix-spacing-lg"], "1rem");
    assert_eq!(set.declarations.len(), 6);
}

#[test]
fn test_end_to_end_references() {
    let set = build_variables(&sample_tokens(), &sample_options()).unwrap();

    assert_eq!(set.references["text"]["DEFAULT"], "var(--my-prefix-text, #111)");
    assert_eq!(
        set.references["text"]["muted"],
        "var(--my-prefix-text-muted, #333)"
    );
    assert_eq!(set.references["border"], "var(--my-prefix-border, #999)");
    assert_eq!(
        set.references["spacing"]["sm"],
        "var(--my-prefix-spacing-sm, 0.25rem)"
    );
}

#[test]
fn test_references_mirror_input_shape() {
    let tokens = sample_tokens();
    let set = build_variables(&tokens, &sample_options()).unwrap();

    assert_eq!(keys_of(&set.references), keys_of(&tokens));
    assert_eq!(
        keys_of(set.references["text"].as_object().unwrap()),
        keys_of(tokens["text"].as_object().unwrap())
    );
    assert_eq!(
        keys_of(set.references["spacing"].as_object().unwrap()),
        keys_of(tokens["spacing"].as_object().unwrap())
    );
    assert!(set.references["border"].is_string());
}

#[test]
fn test_raw_equals_input() {
    let tokens = sample_tokens();
    let set = build_variables(&tokens, &sample_options()).unwrap();

    assert_eq!(set.raw, tokens);
}

#[test]
fn test_every_reference_cites_a_declaration() {
    let set = build_variables(&sample_tokens(), &sample_options()).unwrap();

    for leaf in reference_leaves(&set.references) {
        let inner = leaf
            .strip_prefix("var(--")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap();
        let (name, fallback) = inner.split_once(", ").unwrap();
        assert_eq!(set.declarations[name], fallback);
    }
}

#[test]
fn test_no_fallback_without_option() {
    let options = VariableOptions {
        include_fallback: false,
        ..sample_options()
    };
    let set = build_variables(&sample_tokens(), &options).unwrap();

    assert_eq!(set.references["border"], "var(--my-prefix-border)");
    assert_eq!(set.references["text"]["DEFAULT"], "var(--my-prefix-text)");
}

#[test]
fn test_colliding_names_last_write_wins() {
    // both keys canonicalize to border-color; traversal order decides
    let tokens = json!({
        "borderColor": "#first",
        "border-color": "#second",
    })
    .as_object()
    .unwrap()
    .clone();

    let set = build_variables(&tokens, &VariableOptions::default()).unwrap();

    assert_eq!(set.declarations.len(), 1);
    assert_eq!(set.declarations["border-color"], "#second");
    // both reference leaves still exist and point at the shared name
    assert_eq!(set.references["borderColor"], "var(--border-color)");
    assert_eq!(set.references["border-color"], "var(--border-color)");
}

#[test]
fn test_empty_tree() {
    let set = build_variables(&Map::new(), &VariableOptions::default()).unwrap();

    assert!(set.declarations.is_empty());
    assert!(set.references.is_empty());
    assert!(set.raw.is_empty());
}

#[test]
fn test_deeply_nested_names() {
    let tokens = json!({
        "colorScheme": { "dark": { "onSurface": { "DEFAULT": "#eee" } } },
    })
    .as_object()
    .unwrap()
    .clone();
    let options = VariableOptions {
        root_keys: vec!["DEFAULT".to_string()],
        ..Default::default()
    };

    let set = build_variables(&tokens, &options).unwrap();

    assert_eq!(set.declarations["color-scheme-dark-on-surface"], "#eee");
}

fn keys_of(map: &Map<String, Value>) -> Vec<&String> {
    map.keys().collect()
}

/// Collect every string leaf of a reference tree
fn reference_leaves(map: &Map<String, Value>) -> Vec<&str> {
    let mut leaves = Vec::new();
    for value in map.values() {
        match value {
            Value::String(s) => leaves.push(s.as_str()),
            Value::Object(sub) => leaves.extend(reference_leaves(sub)),
            _ => panic!("reference trees hold only strings and objects"),
        }
    }
    leaves
}
