// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: ordered-subsequence containment.
//!
//! A candidate matches a token when the token's characters occur in the
//! candidate in the same relative order, with arbitrary gaps allowed -
//! `"ace"` matches `"abcde"`, `"eca"` does not. Comparison is
//! case-insensitive and nothing else: no accent stripping, no width
//! folding, no edit distance.
//!
//! The scan is a hand-rolled two-pointer walk rather than a compiled
//! pattern. Every token character is literal data, so there are no
//! metacharacters to escape and no pattern engine to mis-drive: `"."`
//! matches only a real dot.
//!
//! Matchers are stateless. `is_match` borrows immutably and allocates only
//! the folded candidate, so one compiled matcher can serve the search and
//! suggestion engines concurrently.

use crate::types::Token;

/// A compiled, reusable ordered-subsequence test for one token.
///
/// Compile once per token per query, then test against any number of
/// candidate strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatcher {
    /// Case-folded token characters, in order. Non-empty: `Token` cannot
    /// be empty, and folding never produces an empty string from a
    /// non-empty one.
    needle: Vec<char>,
}

impl FuzzyMatcher {
    /// Compile a token into a matcher.
    ///
    /// Folding uses `str::to_lowercase` so multi-character lowerings
    /// (e.g. 'İ' → "i\u{307}") are handled the same way on both sides.
    pub fn compile(token: &Token) -> Self {
        FuzzyMatcher {
            needle: token.as_str().to_lowercase().chars().collect(),
        }
    }

    /// Does `candidate` contain the token as an ordered subsequence?
    ///
    /// Two-pointer scan: walk the folded candidate once, advancing through
    /// the needle on each character match. Greedy matching is complete
    /// here - taking the earliest possible occurrence of each needle
    /// character never rules out a later match that some other alignment
    /// would have found.
    pub fn is_match(&self, candidate: &str) -> bool {
        let mut pending = self.needle.iter().copied().peekable();
        for c in candidate.to_lowercase().chars() {
            if pending.peek() == Some(&c) {
                pending.next();
            }
            if pending.peek().is_none() {
                return true;
            }
        }
        pending.peek().is_none()
    }
}
