// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Three field hits, three fixed weights, one sum. A title hit is the most
//! specific signal a query can produce, characters next, keywords weakest.
//!
//! # Key Invariant: Title Dominance
//!
//! The weights satisfy:
//!
//! ```text
//! TITLE_WEIGHT > CHARACTER_WEIGHT + KEYWORD_WEIGHT   (8 > 4 + 2)
//! ```
//!
//! so a title-only match always outranks a record matching on both
//! character and keyword fields but not the title. Likewise
//! `CHARACTER_WEIGHT > KEYWORD_WEIGHT`, so within non-title matches the
//! character hit decides. Power-of-two weights make each score a readable
//! bitmask of which fields hit.

/// Weight for a title hit: every query token fuzzy-matches the title.
pub const TITLE_WEIGHT: u32 = 8;

/// Weight for a character hit: every token matches some character entry.
pub const CHARACTER_WEIGHT: u32 = 4;

/// Weight for a keyword hit: every token matches some keyword entry.
pub const KEYWORD_WEIGHT: u32 = 2;

/// Combine field hits into a relevance score.
///
/// Zero means no field satisfied all predicates; the search engine drops
/// the record. Non-zero scores order the result list (descending, input
/// order breaking ties).
#[inline]
pub fn score(title_hit: bool, character_hit: bool, keyword_hit: bool) -> u32 {
    u32::from(title_hit) * TITLE_WEIGHT
        + u32::from(character_hit) * CHARACTER_WEIGHT
        + u32::from(keyword_hit) * KEYWORD_WEIGHT
}
