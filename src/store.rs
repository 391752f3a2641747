// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Document id → projected document.

use std::collections::HashMap;

use crate::value::Document;

/// Holds the projected form of every ingested document, keyed by its
/// stringified id.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: HashMap<String, Document>,
}

impl DocumentStore {
    /// An empty store.
    pub fn new() -> Self {
        DocumentStore {
            documents: HashMap::new(),
        }
    }

    /// Insert or replace the projected document for `id`.
    pub fn insert(&mut self, id: String, document: Document) {
        self.documents.insert(id, document);
    }

    /// Look up a document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// True if `id` has a stored document.
    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every stored document id, in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.documents.keys()
    }
}

/// Restrict `document` to the id field plus every configured field present
/// on it, per spec.md §4.3 step 2.
pub fn project(document: &Document, id_field: &str, fields: &[String]) -> Document {
    let mut projected = Document::new();
    if let Some(v) = document.get(id_field) {
        projected.insert(id_field, v.clone());
    }
    for field in fields {
        if let Some(v) = document.get(field) {
            projected.insert(field.as_str(), v.clone());
        }
    }
    projected
}
