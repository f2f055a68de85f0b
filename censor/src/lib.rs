//! Schema-driven, in-place censoring of structured values.
//!
//! Callers describe *which* leaves are sensitive with a list of [`Rule`]s
//! (a path plus a [`Placeholder`]) and the engine rewrites matching leaves
//! of a record or dynamically-typed map before it is logged or exported.
//!
//! - Paths join field/key names with `/` (`"Outer/Inner"`); `*` matches
//!   every leaf without an exact rule.
//! - Records and mappings are always walked, never replaced.
//! - A replacement that does not fit a leaf's type resets the leaf to its
//!   zero value (`""`, `0`, `false`, `None`, ...). Nothing below the root ever
//!   fails.
//! - The only error is [`CensorError::NotCensorable`], returned for roots
//!   that are neither records nor string-keyed maps of dynamic values
//!   ([`Map`], `serde_json::Map`). Typed maps such as `HashMap<String, String>`
//!   are only walked below the root.
//!
//! ```ignore
//! use censor::{censor, Censor, Rule};
//!
//! #[derive(Censor)]
//! struct Login {
//!     user: String,
//!     password: String,
//! }
//!
//! let mut login = Login { user: "ada".into(), password: "hunter2".into() };
//! censor(&mut login, &[Rule::zero("password")])?;
//! assert_eq!(login.password, "");
//! ```
//!
//! What this crate does not do:
//! - validate a schema against a target's shape
//! - copy the target (it is mutated in place)
//! - detect cycles (targets must be acyclic)
//!
//! Features:
//! - `derive` (default): re-exports `#[derive(Censor)]`
//! - `json`: censoring of `serde_json::Value` and serde support for [`Value`]
//! - `slog`: `slog::Value` adapter that logs the censored JSON form

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use censor_derive::Censor;

#[allow(unused_extern_crates)]
extern crate self as censor;

mod engine;
mod error;
#[cfg(feature = "json")]
mod json;
mod mask;
mod shape;
#[cfg(feature = "slog")]
pub mod slog;
mod value;

pub use engine::{
    censor, censor_indexed, censor_with, ContextualFn, Placeholder, PureFn, Rule, Schema,
    SchemaIndex, SEPARATOR, WILDCARD,
};
pub use error::{CensorError, Result};
pub use mask::{Mask, CENSORED_PLACEHOLDER};
pub use shape::{Censorable, Entry, Field, Leaf, Mapping, Record, Shape};
pub use value::{Kind, Map, Value};
