// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Walks the inverted index against a query, scores candidates, and
//! produces the final ranked (or wildcard) result list.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::index::InvertedIndex;
use crate::levenshtein::levenshtein_distance;
use crate::scoring::score_term;
use crate::store::DocumentStore;
use crate::tokenize::tokenize;
use crate::value::Document;

/// Scores strictly above this threshold survive into the result list.
pub const SCORE_THRESHOLD: f64 = 2.1;
/// Maximum number of results returned by a general-path search.
pub const RESULT_CAP: usize = 34;
/// The reserved query string that triggers the wildcard path.
pub const WILDCARD_QUERY: &str = "*";

/// A caller-supplied predicate over a candidate document. Called at most
/// once per candidate document per search.
pub type Filter<'a> = dyn Fn(&Document) -> bool + 'a;

/// One ranked (or wildcard) search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// The matched document's id.
    pub id: String,
    /// Its accumulated score (always `1.0` for wildcard results).
    pub score: f64,
    /// The projected document, hydrated from the store.
    pub document: Document,
}

/// How an indexed term matched a query term, carrying what
/// [`crate::scoring::score_term`] needs to compute the match-type penalty.
#[derive(Debug, Clone, Copy)]
pub enum MatchPenalty {
    /// The indexed term starts with the query term (including equality).
    Prefix { indexed_len: usize, query_len: usize },
    /// The indexed term is within the fuzzy-distance bound and not a prefix.
    Fuzzy { indexed_len: usize, distance: usize },
}

/// Run a search against `index`/`store` under `config`.
///
/// `query == "*"` takes the wildcard path (§4.6): every configured initial
/// result, in order, unfiltered by score or count. Anything else takes the
/// general path: tokenize, scan every indexed term against every query
/// term under both prefix and fuzzy predicates, accumulate, sort, and
/// truncate.
pub fn search(
    query: &str,
    filter: Option<&Filter<'_>>,
    config: &EngineConfig,
    index: &InvertedIndex,
    store: &DocumentStore,
) -> Vec<SearchHit> {
    if query == WILDCARD_QUERY {
        return wildcard(config, store, filter);
    }
    general(query, filter, config, index, store)
}

fn wildcard(config: &EngineConfig, store: &DocumentStore, filter: Option<&Filter<'_>>) -> Vec<SearchHit> {
    config
        .initial_results()
        .iter()
        .filter_map(|id| {
            let document = store.get(id)?;
            if let Some(f) = filter {
                if !f(document) {
                    return None;
                }
            }
            Some(SearchHit {
                id: id.clone(),
                score: 1.0,
                document: document.clone(),
            })
        })
        .collect()
}

fn general(
    query: &str,
    filter: Option<&Filter<'_>>,
    config: &EngineConfig,
    index: &InvertedIndex,
    store: &DocumentStore,
) -> Vec<SearchHit> {
    let query_terms = tokenize(query);
    if query_terms.is_empty() {
        return Vec::new();
    }

    let mut acc: HashMap<String, f64> = HashMap::new();
    let mut filter_cache: HashMap<String, bool> = HashMap::new();

    for field in config.fields() {
        if config.custom_boost_factor_field() == Some(field.as_str()) {
            continue;
        }

        for q in &query_terms {
            let max_distance = max_fuzzy_distance(q);

            for (indexed_term, doc_ids) in index.postings() {
                let Some(penalty) = classify(indexed_term, q, max_distance) else {
                    continue;
                };
                let doc_freq = doc_ids.len();

                for id in doc_ids {
                    let passes = *filter_cache.entry(id.clone()).or_insert_with(|| match store.get(id) {
                        Some(doc) => match filter {
                            Some(f) => f(doc),
                            None => true,
                        },
                        None => false,
                    });
                    if !passes {
                        continue;
                    }
                    let Some(document) = store.get(id) else {
                        continue;
                    };
                    let Some(doc_length) = index.document_length(id) else {
                        continue;
                    };

                    let custom_boost_value = config
                        .custom_boost_factor_field()
                        .and_then(|cbf| document.get(cbf))
                        .and_then(crate::value::FieldValue::as_number);

                    let score = score_term(
                        doc_freq,
                        index.total_documents(),
                        doc_length,
                        index.average_document_length(),
                        penalty,
                        config.document_boost(id),
                        config.field_boost(field),
                        custom_boost_value,
                    );

                    *acc.entry(id.clone()).or_insert(0.0) += score;
                }
            }
        }
    }

    let mut hits: Vec<SearchHit> = acc
        .into_iter()
        .filter_map(|(id, score)| {
            let document = store.get(&id)?.clone();
            Some(SearchHit { id, score, document })
        })
        .collect();

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits.retain(|hit| hit.score > SCORE_THRESHOLD);
    hits.truncate(RESULT_CAP);
    hits
}

fn max_fuzzy_distance(query_term: &str) -> usize {
    let len = query_term.chars().count() as f64;
    (len * 0.35).round().min(6.0) as usize
}

fn classify(indexed_term: &str, query_term: &str, max_distance: usize) -> Option<MatchPenalty> {
    if indexed_term.starts_with(query_term) {
        return Some(MatchPenalty::Prefix {
            indexed_len: indexed_term.chars().count(),
            query_len: query_term.chars().count(),
        });
    }

    let distance = levenshtein_distance(query_term, indexed_term);
    if distance <= max_distance {
        return Some(MatchPenalty::Fuzzy {
            indexed_len: indexed_term.chars().count(),
            distance,
        });
    }

    None
}
