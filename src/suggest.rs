// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions from the vocabulary universe.
//!
//! Unlike the search engine's per-field rule, each vocabulary entry is one
//! whole string tested directly against every matcher. Vocabulary order
//! (first observed during indexing) is preserved - no re-sort.
//!
//! With no tokens the full vocabulary comes back unchanged: before the
//! user types anything, autocomplete shows the complete option set. This
//! deliberately differs from `search`, where no tokens means no search.

use crate::fuzzy::FuzzyMatcher;
use crate::types::Token;

/// Filter the vocabulary down to entries every token fuzzy-matches.
pub fn suggest(tokens: &[Token], vocabulary: &[String]) -> Vec<String> {
    let matchers: Vec<FuzzyMatcher> = tokens.iter().map(FuzzyMatcher::compile).collect();
    vocabulary
        .iter()
        .filter(|entry| matchers.iter().all(|m| m.is_match(entry)))
        .cloned()
        .collect()
}
