// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! The document type: a flat string-keyed record of strings and numbers.
//!
//! A [`Document`] is what the host hands to [`crate::SearchEngine::add_document`].
//! Only the id field and the fields named in [`crate::EngineConfig`] are kept
//! after ingest (see `store.rs`); everything else is dropped on the floor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single field value: either a string (tokenized and indexed) or a
/// number (carried through for display and custom-boost lookups, never
/// tokenized).
///
/// Bool and null, while valid JSON, are not valid field values per the data
/// model (spec.md's Document is string-or-number); callers get a type error
/// if the id field holds one. Non-id fields that hold other JSON types are
/// simply not string-valued, so they are stored but neither tokenized nor
/// length-counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A text value. Tokenized and indexed when it is a configured field.
    String(String),
    /// A numeric value. Never tokenized; usable as a custom boost source.
    Number(f64),
    /// Any other JSON shape (bool, null, array, object). Stored for display,
    /// never indexed.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Stringify for use as a document id, the way `add_document` must per
    /// spec.md §4.3: numbers and strings both convert; anything else is a
    /// caller error (see `error::IndexError::InvalidIdField`).
    pub fn as_id_string(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Other(_) => None,
        }
    }

    /// The string form of this value, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric form of this value, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A flat document: field name to value. This is the shape a host passes to
/// [`crate::SearchEngine::add_document`] before projection down to the
/// configured fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document(pub BTreeMap<String, FieldValue>);

impl Document {
    /// An empty document; fields are added with [`Document::insert`].
    pub fn new() -> Self {
        Document(BTreeMap::new())
    }

    /// Set a field value, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<serde_json::Value> for Document {
    /// Convert a parsed JSON object into a `Document`. Non-object JSON
    /// (array, scalar) yields an empty document - the host is expected to
    /// hand in objects, per spec.md §6 ("document is a flat key/value
    /// record").
    fn from(value: serde_json::Value) -> Self {
        let mut doc = Document::new();
        if let serde_json::Value::Object(map) = value {
            for (k, v) in map {
                let field = match v {
                    serde_json::Value::String(s) => FieldValue::String(s),
                    serde_json::Value::Number(n) => {
                        FieldValue::Number(n.as_f64().unwrap_or_default())
                    }
                    other => FieldValue::Other(other),
                };
                doc.insert(k, field);
            }
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_id_passes_through() {
        let v = FieldValue::String("/a".into());
        assert_eq!(v.as_id_string(), Some("/a".to_string()));
    }

    #[test]
    fn integral_number_id_has_no_decimal_point() {
        let v = FieldValue::Number(42.0);
        assert_eq!(v.as_id_string(), Some("42".to_string()));
    }

    #[test]
    fn fractional_number_id_keeps_decimal_point() {
        let v = FieldValue::Number(4.5);
        assert_eq!(v.as_id_string(), Some("4.5".to_string()));
    }

    #[test]
    fn non_scalar_value_has_no_id_string() {
        let v = FieldValue::Other(serde_json::json!([1, 2]));
        assert_eq!(v.as_id_string(), None);
    }

    #[test]
    fn document_from_json_object() {
        let doc: Document = serde_json::json!({"path": "/a", "views": 12}).into();
        assert_eq!(doc.get("path"), Some(&FieldValue::String("/a".into())));
        assert_eq!(doc.get("views"), Some(&FieldValue::Number(12.0)));
    }

    #[test]
    fn document_from_non_object_json_is_empty() {
        let doc: Document = serde_json::json!([1, 2, 3]).into();
        assert!(doc.0.is_empty());
    }
}
