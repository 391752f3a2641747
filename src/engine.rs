// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! The facade that ties configuration, storage, indexing, and querying
//! into the three operations a host actually calls.

use crate::config::EngineConfig;
use crate::contracts;
use crate::error::{IndexError, Result};
use crate::index::InvertedIndex;
use crate::query::{self, Filter, SearchHit};
use crate::store::{self, DocumentStore};
use crate::value::Document;

/// An in-memory search engine over one fixed [`EngineConfig`].
///
/// Single-threaded, cooperative: `add_document` and `search` each run to
/// completion with no internal suspension and no I/O. Nothing here holds a
/// lock; a host that shares one engine across callers is responsible for
/// serializing access itself (spec.md §5).
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    store: DocumentStore,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Construct an engine over `config`. No side effects.
    pub fn new(config: EngineConfig) -> Self {
        SearchEngine {
            config,
            store: DocumentStore::new(),
            index: InvertedIndex::new(),
        }
    }

    /// Ingest a document: resolve its id, project it to the configured
    /// fields, and update the store, index, and length statistics.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingIdField`] if the configured id field is
    /// absent, or [`IndexError::InvalidIdField`] if it holds neither a
    /// string nor a number. Neither case mutates engine state.
    pub fn add_document(&mut self, document: impl Into<Document>) -> Result<()> {
        let document = document.into();
        let id_value = document
            .get(self.config.id_field())
            .ok_or_else(|| IndexError::MissingIdField {
                field: self.config.id_field().to_string(),
            })?;
        let id = id_value.as_id_string().ok_or_else(|| IndexError::InvalidIdField {
            field: self.config.id_field().to_string(),
        })?;

        let projected = store::project(&document, self.config.id_field(), self.config.fields());

        let string_fields: Vec<(&str, &str)> = self
            .config
            .fields()
            .iter()
            .filter_map(|field| {
                let value = projected.get(field)?.as_str()?;
                Some((field.as_str(), value))
            })
            .collect();

        self.index.index_document(&id, &string_fields);
        self.store.insert(id.clone(), projected);

        contracts::check_invariants(&self.store, &self.index);

        tracing::debug!(id = %id, total_documents = self.index.total_documents(), "document indexed");

        Ok(())
    }

    /// Search the engine, per spec.md §4.6.
    ///
    /// `query == "*"` takes the wildcard path over [`EngineConfig::initial_results`];
    /// anything else tokenizes the query and scores every candidate with
    /// BM25+ under prefix and fuzzy matching, returning at most
    /// [`query::RESULT_CAP`] results with score above [`query::SCORE_THRESHOLD`].
    pub fn search(&self, query: &str, filter: Option<&Filter<'_>>) -> Vec<SearchHit> {
        let hits = query::search(query, filter, &self.config, &self.index, &self.store);
        tracing::trace!(query, results = hits.len(), "search completed");
        hits
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of documents currently indexed.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if no documents have been added yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SearchEngine {
        let config = EngineConfig::builder()
            .id_field("path")
            .field("title")
            .field("body")
            .build()
            .unwrap();
        SearchEngine::new(config)
    }

    #[test]
    fn add_document_requires_the_id_field() {
        let mut engine = engine();
        let err = engine.add_document(Document::new().with("title", "no id here")).unwrap_err();
        assert_eq!(
            err,
            IndexError::MissingIdField {
                field: "path".to_string()
            }
        );
        assert!(engine.is_empty());
    }

    #[test]
    fn add_document_rejects_a_non_scalar_id() {
        let mut engine = engine();
        let doc: Document = serde_json::json!({"path": [1, 2], "title": "x"}).into();
        let err = engine.add_document(doc).unwrap_err();
        assert_eq!(
            err,
            IndexError::InvalidIdField {
                field: "path".to_string()
            }
        );
    }

    #[test]
    fn add_document_then_search_finds_it() {
        let mut engine = engine();
        engine
            .add_document(
                Document::new()
                    .with("path", "/a")
                    .with("title", "Hello")
                    .with("body", "world"),
            )
            .unwrap();
        assert_eq!(engine.len(), 1);

        // Below threshold on its own (spec.md S1); confirms add_document
        // wired the document through to the index without erroring.
        let hits = engine.search("hello", None);
        assert!(hits.is_empty());
    }

    #[test]
    fn re_adding_an_id_updates_rather_than_duplicates() {
        let mut engine = engine();
        engine.add_document(Document::new().with("path", "/a").with("title", "Hello")).unwrap();
        engine.add_document(Document::new().with("path", "/a").with("title", "Goodbye")).unwrap();

        assert_eq!(engine.len(), 1);
        assert_eq!(
            engine.store.get("/a").unwrap().get("title"),
            Some(&crate::value::FieldValue::String("Goodbye".to_string()))
        );
    }
}
