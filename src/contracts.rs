// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime invariant checks, compiled out of release builds.
//!
//! These mirror spec.md §3's invariants and §8's testable properties.
//! They exist to catch a broken internal assumption during development and
//! testing, not to validate caller input - `debug_assert!` means they cost
//! nothing in a release build.

use crate::index::InvertedIndex;
use crate::store::DocumentStore;

/// Check every invariant after an `add_document` call. A no-op in release
/// builds.
pub fn check_invariants(store: &DocumentStore, index: &InvertedIndex) {
    debug_assert_eq!(
        index.total_documents(),
        store.len(),
        "total_documents must equal the document store's size"
    );

    for id in store.ids() {
        debug_assert!(
            index.document_length(id).is_some(),
            "document_lengths must be defined for every id in the store: {id}"
        );
    }

    for (term, ids) in index.postings() {
        debug_assert_eq!(term, &term.to_lowercase(), "indexed terms must be lowercase: {term}");
        debug_assert!(!term.is_empty(), "indexed terms must be non-empty");

        for id in ids {
            debug_assert!(
                store.contains(id),
                "every id in a posting set must appear in the document store: {id}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Document;

    #[test]
    fn invariants_hold_after_indexing_a_document() {
        let mut store = DocumentStore::new();
        let mut index = InvertedIndex::new();

        store.insert("/a".to_string(), Document::new().with("path", "/a").with("title", "Hello"));
        index.index_document("/a", &[("title", "Hello")]);

        check_invariants(&store, &index);
    }

    #[test]
    fn invariants_hold_on_an_empty_engine() {
        let store = DocumentStore::new();
        let index = InvertedIndex::new();
        check_invariants(&store, &index);
    }
}
