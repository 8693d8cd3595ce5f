//! # css-token-vars
//!
//! A library for generating CSS custom properties from nested design token maps.
//!
//! Given a tree of string-valued tokens (colors, spacing, typography), this crate produces:
//! - **Declarations**: a flat map of generated variable names to their literal values.
//! - **References**: a mirror of the input tree where each leaf is a `var()` expression,
//!   optionally carrying the original value as a fallback.
//! - **Flat maps**: a separate flattener that joins nested keys with a configurable separator.
//!
//! ## Features
//!
//! - **Kebab-case naming**: Key segments are canonicalized across camel-case, digit,
//!   and whitespace boundaries.
//! - **Root keys**: A designated key such as `"DEFAULT"` collapses onto its parent's
//!   name instead of extending it.
//! - **Order preservation**: Output maps follow the input tree's insertion order.
//! - **Fail-fast validation**: Non-string, non-object values abort with a typed error.
//!
//! ## Usage
//!
//! ```rust
//! use css_token_vars::{build_variables, VariableOptions};
//! use serde_json::json;
//!
//! fn main() -> css_token_vars::Result<()> {
//!     let tokens = json!({
//!         "text": { "DEFAULT": "#111", "muted": "#333" },
//!         "borderColor": "#999",
//!     });
//!
//!     let options = VariableOptions {
//!         prefix: "theme".to_string(),
//!         root_keys: vec!["DEFAULT".to_string()],
//!         ..Default::default()
//!     };
//!
//!     let set = build_variables(tokens.as_object().unwrap(), &options)?;
//!     assert_eq!(set.declarations["theme-text"], "#111");
//!     assert_eq!(set.references["borderColor"], "var(--theme-border-color)");
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod casing;
pub mod error;
pub mod flatten;
pub mod options;

pub use builder::{build_variables, VariableSet};
pub use casing::to_kebab_case;
pub use error::{Error, Result};
pub use flatten::flatten_variables;
pub use options::{FlattenOptions, VariableOptions};
