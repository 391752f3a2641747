// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search: BM25+ scoring, prefix matching, and bounded
//! Levenshtein fuzzy matching over small-to-medium document corpora.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌─────────────┐     ┌──────────┐
//! │ tokenize  │────▶│   index     │────▶│  query   │
//! │ (terms)   │     │ (postings,  │     │ (search) │
//! │           │     │  lengths)   │     │          │
//! └───────────┘     └─────────────┘     └────┬─────┘
//!                          ▲                  │
//!                          │                  ▼
//!                    ┌───────────┐      ┌───────────┐
//!                    │   store   │      │  scoring  │
//!                    │ (documents│      │  (BM25+)  │
//!                    └───────────┘      └───────────┘
//! ```
//!
//! Everything is orchestrated by [`engine::SearchEngine`], the single entry
//! point a host embeds: `add_document` to ingest, `search` to query.
//!
//! # Usage
//!
//! ```
//! use lexiscan::{EngineConfig, SearchEngine};
//! use serde_json::json;
//!
//! let config = EngineConfig::builder()
//!     .id_field("path")
//!     .fields(["title", "body"])
//!     .build()
//!     .unwrap();
//!
//! let mut engine = SearchEngine::new(config);
//! engine
//!     .add_document(json!({"path": "/a", "title": "Hello", "body": "world"}))
//!     .unwrap();
//!
//! let hits = engine.search("hello", None);
//! ```

mod config;
mod contracts;
mod engine;
mod error;
mod index;
mod levenshtein;
mod query;
mod scoring;
mod store;
mod tokenize;
mod value;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::SearchEngine;
pub use error::{ConfigError, IndexError};
pub use query::{Filter, SearchHit, RESULT_CAP, SCORE_THRESHOLD, WILDCARD_QUERY};
pub use value::{Document, FieldValue};

// Exposed for property/integration tests and downstream tooling that wants
// the building blocks directly rather than going through the facade.
pub use index::InvertedIndex;
pub use levenshtein::levenshtein_distance;
pub use scoring::score_term;
pub use tokenize::tokenize;
