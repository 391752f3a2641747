// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Splitting a field value into lowercase index terms.
//!
//! Two rules, tried in order:
//!
//! 1. URL-path bypass: a lowercased value that contains a `/` and ends in
//!    `.html` (after a run of non-whitespace characters) is emitted whole,
//!    as a single term. This keeps paths like `/blog/my-post.html` searchable
//!    by exact prefix instead of getting shredded into `blog`, `my`, `post`,
//!    `html`.
//! 2. Otherwise, split on any run of Unicode space-or-punctuation characters
//!    (`\p{Z}\p{P}`) and emit each non-empty piece.
//!
//! Re-tokenizing any emitted term reproduces it: the URL-path term survives
//! whole (it still matches its own bypass rule), and an ordinary term
//! contains no space/punctuation left to split on.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\S*\.html$").unwrap());
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Z}\p{P}]+").unwrap());

/// Tokenize a single field value into lowercase terms.
///
/// Returns the terms in source order; non-empty only.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    if URL_PATH.is_match(&lowered) {
        return vec![lowered];
    }

    SEPARATOR
        .split(&lowered)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
