// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Term → document-id postings, per-document length table, and the running
//! average document length the scorer needs.
//!
//! `average_document_length` is maintained eagerly after every
//! [`InvertedIndex::index_document`] call, resolving the staleness this
//! module would otherwise inherit (see `DESIGN.md`): the running sum of
//! document lengths divided by the document count, recomputed on each add.
//!
//! Re-adding a previously seen id removes that id's prior postings and
//! length contribution before indexing it again, so `total_documents`
//! tracks the store's true size rather than inflating on repeat ingests
//! (`DESIGN.md` resolves this in favor of coherent re-add over the
//! unconditional-increment behavior spec.md flags as an open question).

use std::collections::{HashMap, HashSet};

use crate::tokenize::tokenize;

/// Term → document ids, plus the length bookkeeping the scorer reads.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashSet<String>>,
    document_lengths: HashMap<String, usize>,
    document_terms: HashMap<String, HashSet<String>>,
    total_documents: usize,
    sum_of_lengths: usize,
    average_document_length: f64,
}

impl InvertedIndex {
    /// An empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Index one document's configured string-valued fields: tokenize each
    /// value, record the document's length, and update the running
    /// document count and average length.
    ///
    /// `string_fields` is the already-filtered, already-projected list of
    /// `(field name, string value)` pairs from the document's
    /// string-valued configured fields; non-string fields never reach this
    /// routine (they contribute nothing to tokenization or length, per
    /// spec.md §4.4).
    pub fn index_document(&mut self, id: &str, string_fields: &[(&str, &str)]) {
        self.remove_existing(id);

        let mut doc_length = 0usize;
        let mut terms_for_doc: HashSet<String> = HashSet::new();

        for (_field, value) in string_fields {
            doc_length += value.chars().count();
            for term in tokenize(value) {
                self.postings.entry(term.clone()).or_default().insert(id.to_string());
                terms_for_doc.insert(term);
            }
        }

        self.document_lengths.insert(id.to_string(), doc_length);
        self.document_terms.insert(id.to_string(), terms_for_doc);
        self.sum_of_lengths += doc_length;
        self.total_documents += 1;
        self.recompute_average();
    }

    fn remove_existing(&mut self, id: &str) {
        let Some(old_terms) = self.document_terms.remove(id) else {
            return;
        };
        for term in &old_terms {
            if let Some(ids) = self.postings.get_mut(term) {
                ids.remove(id);
                if ids.is_empty() {
                    self.postings.remove(term);
                }
            }
        }
        if let Some(old_length) = self.document_lengths.remove(id) {
            self.sum_of_lengths -= old_length;
            self.total_documents -= 1;
        }
    }

    fn recompute_average(&mut self) {
        self.average_document_length = if self.total_documents == 0 {
            0.0
        } else {
            self.sum_of_lengths as f64 / self.total_documents as f64
        };
    }

    /// All `(indexed_term, doc_ids)` postings, in arbitrary order - the
    /// query evaluator scans every one per `(field, query-term)` pair.
    pub fn postings(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.postings.iter()
    }

    /// Length of the indexed document, or `None` if `id` is unknown.
    pub fn document_length(&self, id: &str) -> Option<usize> {
        self.document_lengths.get(id).copied()
    }

    /// Number of documents currently indexed.
    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// `(sum of document lengths) / total_documents`, or `0.0` with no
    /// documents indexed.
    pub fn average_document_length(&self) -> f64 {
        self.average_document_length
    }
}
