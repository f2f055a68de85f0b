//! Schema compilation, placeholder resolution, substitution and traversal.
//!
//! - **`schema`**: rules, placeholders and the per-call [`SchemaIndex`]
//! - **`resolve`**: placeholder to concrete replacement
//! - **`substitute`**: type-checked replacement of a single leaf
//! - **`traverse`**: the depth-first walk and the public entrypoints

mod resolve;
mod schema;
mod substitute;
mod traverse;

pub use schema::{
    ContextualFn, Placeholder, PureFn, Rule, Schema, SchemaIndex, SEPARATOR, WILDCARD,
};
pub use traverse::{censor, censor_indexed, censor_with};
