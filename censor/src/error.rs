//! The single call-level failure.
//!
//! Problems below the root (unmatched leaves, type mismatches, `Keep`
//! placeholders) are absorbed by the engine and never surface here.

use thiserror::Error;

use crate::value::Kind;

/// Errors returned by the censoring entrypoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CensorError {
    /// The root is neither a record nor a string-keyed mapping of dynamic
    /// values.
    #[error("type not censorable: expected a record or a map of dynamic values, found {found}")]
    NotCensorable {
        /// Kind of the rejected root value.
        found: Kind,
    },
}

pub type Result<T, E = CensorError> = std::result::Result<T, E>;
