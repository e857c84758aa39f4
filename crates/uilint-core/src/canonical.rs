//! # Canonical Text — Deterministic Encoding for Pattern Detection
//!
//! This module defines `CanonicalText`, the sole construction path for the
//! text that pattern rules are matched against.
//!
//! ## Invariant
//!
//! The `CanonicalText` newtype has a private inner field. The only way to
//! construct it is through `CanonicalText::new()`, which checks nesting depth
//! and then encodes with compact separators and a fixed key order. Pattern
//! detection accepts `&CanonicalText`, so no caller can feed it text produced
//! by an ad-hoc `to_string()` whose spacing or key order differs.
//!
//! ## Key Order
//!
//! - [`KeyOrder::Document`] keeps keys in the order they appear in the
//!   document. Rules written as `crud.*table` rely on `"type":"crud"` being
//!   emitted before `"mode":"table"`, which is how schemas are authored.
//! - [`KeyOrder::Sorted`] emits RFC 8785 (JCS) output via `serde_jcs`:
//!   sorted keys, so documents differing only in key order encode equally.
//!
//! Both encodings are compact (`,` and `:` with no whitespace) and keep
//! non-ASCII characters as UTF-8.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CanonicalizationError;
use crate::node;

/// Object key order used by the encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrder {
    /// Keys in document order.
    #[default]
    Document,
    /// Keys sorted per RFC 8785.
    Sorted,
}

/// Options controlling canonical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Object key order.
    pub key_order: KeyOrder,
    /// Maximum container nesting accepted before encoding is refused.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::Document,
            max_depth: 128,
        }
    }
}

/// Text produced exclusively by the canonical encoder.
///
/// # Invariants
///
/// - The only constructor is `CanonicalText::new()`.
/// - The source document nests no deeper than the configured limit.
/// - Separators are compact; key order is fixed by [`KeyOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Encode a schema document.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::DepthExceeded` if the document nests
    /// deeper than `options.max_depth`. Returns
    /// `CanonicalizationError::SerializationFailed` if encoding fails.
    pub fn new(value: &Value, options: &EncodeOptions) -> Result<Self, CanonicalizationError> {
        if node::exceeds_depth(value, options.max_depth) {
            tracing::trace!(limit = options.max_depth, "refusing to encode deeply nested document");
            return Err(CanonicalizationError::DepthExceeded {
                limit: options.max_depth,
            });
        }
        let text = match options.key_order {
            KeyOrder::Document => serde_json::to_string(value)?,
            KeyOrder::Sorted => serde_jcs::to_string(value)?,
        };
        tracing::trace!(
            key_order = ?options.key_order,
            bytes = text.len(),
            "encoded canonical text"
        );
        Ok(Self(text))
    }

    /// Access the encoded text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the encoded text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the encoded text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
