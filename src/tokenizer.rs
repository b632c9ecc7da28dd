// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization: raw input → normalized tokens.
//!
//! A query splits on runs of spaces and commas; each fragment is trimmed and
//! empty fragments are dropped. Fragment order is preserved for readability,
//! but matching does not depend on it - token predicates combine with AND.
//!
//! An empty or all-delimiter query yields an empty token list. That is NOT
//! "match everything": the caller decides what no-search-active means
//! (typically: show the unfiltered catalog).

use crate::types::{Token, DELIMITERS};

/// Split a raw query into normalized tokens.
///
/// `Token::new` does the trimming and the empty/delimiter rejection, so
/// every returned token is non-empty and safe to compile into a matcher.
pub fn tokenize(query: &str) -> Vec<Token> {
    query
        .split(DELIMITERS.as_slice())
        .filter_map(Token::new)
        .collect()
}
