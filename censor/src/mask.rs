//! Text masks for string leaves.
//!
//! A [`Mask`] is a pure string transformation meant to be used through
//! [`Rule::masked`](crate::Rule::masked). Masks operate on Unicode scalar
//! values, not bytes.

use std::borrow::Cow;

use crate::value::Value;

/// Placeholder text used by [`Mask::full`].
pub const CENSORED_PLACEHOLDER: &str = "[CENSORED]";

const DEFAULT_MASK_CHAR: char = '*';

/// How to mask a string value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mask {
    /// Replace the whole value with a placeholder.
    Full { placeholder: Cow<'static, str> },
    /// Keep `first` leading and `last` trailing characters, mask the middle.
    ///
    /// Values no longer than `first + last` are left unchanged.
    Keep {
        first: usize,
        last: usize,
        mask_char: char,
    },
    /// Mask `first` leading and `last` trailing characters, keep the middle.
    ///
    /// Values no longer than `first + last` are masked entirely.
    Hide {
        first: usize,
        last: usize,
        mask_char: char,
    },
}

impl Mask {
    #[must_use]
    pub fn full() -> Self {
        Self::full_with(CENSORED_PLACEHOLDER)
    }

    #[must_use]
    pub fn full_with(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn keep_first(first: usize) -> Self {
        Self::keep_both(first, 0)
    }

    #[must_use]
    pub fn keep_last(last: usize) -> Self {
        Self::keep_both(0, last)
    }

    #[must_use]
    pub fn keep_both(first: usize, last: usize) -> Self {
        Self::Keep {
            first,
            last,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    #[must_use]
    pub fn hide_first(first: usize) -> Self {
        Self::hide_both(first, 0)
    }

    #[must_use]
    pub fn hide_last(last: usize) -> Self {
        Self::hide_both(0, last)
    }

    #[must_use]
    pub fn hide_both(first: usize, last: usize) -> Self {
        Self::Hide {
            first,
            last,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Overrides the masking character. No effect on [`Mask::Full`].
    #[must_use]
    pub fn with_mask_char(mut self, ch: char) -> Self {
        match &mut self {
            Mask::Full { .. } => {}
            Mask::Keep { mask_char, .. } | Mask::Hide { mask_char, .. } => *mask_char = ch,
        }
        self
    }

    /// Masks `text`. Empty input stays empty except under [`Mask::Full`].
    #[must_use]
    pub fn apply_to(&self, text: &str) -> String {
        let (first, last, mask_char, keep_edges) = match self {
            Mask::Full { placeholder } => return placeholder.to_string(),
            Mask::Keep {
                first,
                last,
                mask_char,
            } => (*first, *last, *mask_char, true),
            Mask::Hide {
                first,
                last,
                mask_char,
            } => (*first, *last, *mask_char, false),
        };

        let total = text.chars().count();
        if first.saturating_add(last) >= total {
            return if keep_edges {
                text.to_string()
            } else {
                std::iter::repeat(mask_char).take(total).collect()
            };
        }

        text.chars()
            .enumerate()
            .map(|(position, ch)| {
                let edge = position < first || position >= total - last;
                if edge == keep_edges {
                    ch
                } else {
                    mask_char
                }
            })
            .collect()
    }

    /// Masks a string value. Any other value becomes `Null`.
    #[must_use]
    pub fn transform(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.apply_to(text)),
            _ => Value::Null,
        }
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::full()
    }
}
