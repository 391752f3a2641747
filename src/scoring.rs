// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! The math behind ranking: BM25+ presence, match-type penalties, and boosts.
//!
//! A candidate `(document, indexed term, field)` is scored in three stages,
//! applied in order by [`score_term`]:
//!
//! 1. **BM25+ presence** ([`bm25_presence`]) - term rarity (IDF) times a
//!    length-normalized presence term. Presence, not frequency: the index
//!    stores doc-id sets, not counts, so `tf` is always 1 for any doc the
//!    query evaluator considers (it only ever looks at document ids already
//!    known to contain the term).
//! 2. **Match-type penalty** ([`prefix_penalty`], [`fuzzy_penalty`]) -
//!    discounts the BM25+ score by how exact the match was. A prefix match
//!    on a same-length term scores higher than a fuzzy match three edits
//!    away from a much longer one.
//! 3. **Boosts** - a per-document multiplier, a per-field multiplier, and an
//!    additive contribution from a configured numeric field, applied in that
//!    order.
//!
//! # Constants
//!
//! | Name    | Value | Role                                             |
//! |---------|-------|---------------------------------------------------|
//! | `K`     | 1.2   | BM25 term-frequency saturation                     |
//! | `B`     | 0.7   | BM25 length-normalization strength                 |
//! | `DELTA` | 0.5   | BM25+ lower bound, keeps long docs from scoring 0  |

use crate::query::MatchPenalty;

/// BM25 term-frequency saturation parameter.
pub const K: f64 = 1.2;
/// BM25 length-normalization strength.
pub const B: f64 = 0.7;
/// BM25+ additive floor.
pub const DELTA: f64 = 0.5;

/// Coefficient in the additive custom-boost-field contribution
/// (`score += custom_value * CUSTOM_BOOST_SCALE`).
pub const CUSTOM_BOOST_SCALE: f64 = 0.011;

/// Coefficient for the prefix-match penalty.
const PREFIX_PENALTY_SCALE: f64 = 0.375;
/// Coefficient weighting the length delta inside the prefix penalty.
const PREFIX_DELTA_WEIGHT: f64 = 0.3;
/// Coefficient for the fuzzy-match penalty.
const FUZZY_PENALTY_SCALE: f64 = 0.45;

/// Inverse document frequency with +0.5 smoothing on both sides, so a term
/// that occurs in every document still gets a small positive weight instead
/// of zero or a negative value.
///
/// `idf = ln( (N - df + 0.5) / (df + 0.5) + 1 )`
pub fn idf(total_documents: usize, doc_freq: usize) -> f64 {
    let n = total_documents as f64;
    let df = doc_freq as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// BM25+ presence score for a document known to contain the term.
///
/// `tf` is always 1 here (see module docs), so this collapses the general
/// BM25 term-frequency saturation to a single-hit case:
/// `freq = (k + 1) / (1 + k * norm) + delta`.
///
/// `avg_doc_length` of zero (no documents yet, or a corpus of only
/// zero-length documents) produces a non-finite `norm` and thus a
/// non-finite score; spec.md §7/§9 call this out explicitly and rely on the
/// final `score > 2.1` filter to drop the result rather than special-casing
/// it here.
pub fn bm25_presence(
    doc_freq: usize,
    total_documents: usize,
    doc_length: usize,
    avg_doc_length: f64,
) -> f64 {
    let norm = 1.0 - B + B * (doc_length as f64 / avg_doc_length);
    let freq = (K + 1.0) / (1.0 + K * norm) + DELTA;
    idf(total_documents, doc_freq) * freq
}

/// Penalty for an indexed term that starts with the query term (including
/// equality). Favors indexed terms close in length to the query: a term
/// four characters longer than the query scores lower than an exact-length
/// match.
///
/// `p = PREFIX_PENALTY_SCALE * indexed_len / (indexed_len + PREFIX_DELTA_WEIGHT * (indexed_len - query_len))`
pub fn prefix_penalty(indexed_len: usize, query_len: usize) -> f64 {
    let indexed_len = indexed_len as f64;
    let delta = indexed_len - query_len as f64;
    PREFIX_PENALTY_SCALE * indexed_len / (indexed_len + PREFIX_DELTA_WEIGHT * delta)
}

/// Penalty for an indexed term within the fuzzy-distance bound but not a
/// prefix match. Favors short indexed terms and small edit distances.
///
/// `p = FUZZY_PENALTY_SCALE * indexed_len / (indexed_len + distance)`
pub fn fuzzy_penalty(indexed_len: usize, distance: usize) -> f64 {
    let indexed_len = indexed_len as f64;
    FUZZY_PENALTY_SCALE * indexed_len / (indexed_len + distance as f64)
}

/// Final score for one `(document, indexed term, field)` candidate: BM25+
/// presence, discounted by the match-type penalty, then multiplied by the
/// per-document and per-field boosts (when configured), then summed with
/// the additive custom-boost-field contribution (when configured).
#[allow(clippy::too_many_arguments)]
pub fn score_term(
    doc_freq: usize,
    total_documents: usize,
    doc_length: usize,
    avg_doc_length: f64,
    penalty: MatchPenalty,
    doc_boost: Option<f64>,
    field_boost: Option<f64>,
    custom_boost_value: Option<f64>,
) -> f64 {
    let bm25 = bm25_presence(doc_freq, total_documents, doc_length, avg_doc_length);
    let p = match penalty {
        MatchPenalty::Prefix { indexed_len, query_len } => prefix_penalty(indexed_len, query_len),
        MatchPenalty::Fuzzy { indexed_len, distance } => fuzzy_penalty(indexed_len, distance),
    };

    let mut score = bm25 * p;
    if let Some(sb) = doc_boost {
        score *= sb;
    }
    if let Some(fb) = field_boost {
        score *= fb;
    }
    if let Some(cb) = custom_boost_value {
        score += cb * CUSTOM_BOOST_SCALE;
    }
    score
}
