// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for document ingestion.
//!
//! This crate refuses to do I/O (spec.md §7), so its error surface is small:
//! the two caller-triggerable failures from `add_document`. Both leave the
//! engine's state unchanged - the document is validated before anything is
//! inserted into the store or index.

use thiserror::Error;

/// Result alias for ingest operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Failure modes for [`crate::SearchEngine::add_document`].
#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    /// The document has no value for the configured id field.
    #[error("document is missing id field {field:?}")]
    MissingIdField {
        /// The configured id field name.
        field: String,
    },

    /// The id field is present but holds a value that is neither string nor
    /// number, so it cannot be stringified into a document id.
    #[error("id field {field:?} holds a value that is not a string or number")]
    InvalidIdField {
        /// The configured id field name.
        field: String,
    },
}

/// Configuration-time failures for [`crate::EngineConfigBuilder::build`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `id_field` was never set.
    #[error("engine configuration requires an id_field")]
    MissingIdField,

    /// `fields` was empty - there is nothing to index or search.
    #[error("engine configuration requires at least one searchable field")]
    NoFields,
}
