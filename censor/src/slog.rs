//! Adapters for emitting censored values through `slog`.
//!
//! A value is serialized with `serde_json`, censored in place with a
//! [`Schema`], and emitted as structured JSON via `slog`'s nested-value
//! support. The uncensored form never reaches the logger: if serialization
//! or censoring fails, a fixed message string is logged instead.
//!
//! This module does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::engine::Schema;

const SERIALIZE_FAILED: &str = "Failed to serialize censored value";
const NOT_CENSORABLE: &str = "Value is not censorable";

/// A `slog::Value` holding an already-censored JSON payload.
pub struct CensoredJson {
    value: JsonValue,
}

impl CensoredJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The censored payload.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for CensoredJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts serializable values into a censored `slog::Value`.
///
/// ## Example
/// ```ignore
/// use censor::{slog::IntoCensoredJson, Rule, Schema};
///
/// let schema = Schema::new().with(Rule::zero("password"));
/// info!(logger, "login"; "request" => request.censored_json(&schema));
/// ```
pub trait IntoCensoredJson: Serialize {
    /// Serializes `self` to JSON and censors it with `schema`.
    fn censored_json(&self, schema: &Schema) -> CensoredJson {
        let value = match serde_json::to_value(self) {
            Ok(mut json) => match schema.apply(&mut json) {
                Ok(()) => json,
                Err(_) => JsonValue::String(NOT_CENSORABLE.to_string()),
            },
            Err(_) => JsonValue::String(SERIALIZE_FAILED.to_string()),
        };
        CensoredJson::new(value)
    }
}

impl<T> IntoCensoredJson for T where T: Serialize + ?Sized {}
