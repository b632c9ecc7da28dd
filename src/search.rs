// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking search engine: where the rubber meets the road.
//!
//! Every token's matcher must be satisfied somewhere for a record to
//! surface, and *where* it is satisfied decides the rank:
//!
//! - title hit: every matcher matches the title string;
//! - character hit: every matcher matches at least one `characters` entry
//!   (each matcher may be satisfied by a different entry - the rule is
//!   ∀ matcher ∃ entry, not ∃ entry ∀ matcher);
//! - keyword hit: same rule over `keywords`.
//!
//! Score = 8·title + 4·character + 2·keyword. Zero-score records are
//! dropped; the rest sort by score descending with a **stable** sort, so
//! equal scores keep the input order. That tie-break is a contract, not an
//! accident: input order encodes the curated `serial` display priority.
//!
//! Each call compiles its own matchers and scoring state, so concurrent
//! searches over a shared corpus never interfere.

use crate::fuzzy::FuzzyMatcher;
use crate::scoring::score;
use crate::types::{IndexedRecord, Record, Token};

/// Transient per-record scoring state. Lives only inside one `search` call.
struct ScoredRecord<'a> {
    record: &'a Record,
    score: u32,
}

/// Search the indexed corpus and return matching records, best first.
///
/// Records with equal scores retain their relative input order. An empty
/// `tokens` list returns an empty result: "no search active" is the
/// caller's case to handle (show the full catalog, typically), not a
/// match-everything query.
pub fn search(tokens: &[Token], records: &[IndexedRecord]) -> Vec<Record> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let matchers: Vec<FuzzyMatcher> = tokens.iter().map(FuzzyMatcher::compile).collect();

    let mut scored: Vec<ScoredRecord> = records
        .iter()
        .filter(|indexed| {
            // Fast reject on the precomputed field union: any record that
            // would score > 0 has every matcher matching some union entry,
            // so this filter never drops a scoring record.
            matchers
                .iter()
                .all(|m| indexed.search_index.iter().any(|entry| m.is_match(entry)))
        })
        .filter_map(|indexed| {
            let record = &indexed.record;
            let title_hit = matchers.iter().all(|m| m.is_match(&record.title));
            let character_hit = every_matcher_hits_some(&matchers, &record.characters);
            let keyword_hit = every_matcher_hits_some(&matchers, &record.keywords);

            let score = score(title_hit, character_hit, keyword_hit);
            (score > 0).then_some(ScoredRecord { record, score })
        })
        .collect();

    // sort_by is stable: equal scores keep input (serial) order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored.into_iter().map(|s| s.record.clone()).collect()
}

/// The per-field rule: every matcher finds at least one satisfying entry.
///
/// Vacuously false for an empty field only because `matchers` is non-empty
/// and no matcher can hit anything in an empty list. Absent optional
/// fields are empty lists, so malformed records score the field as a miss
/// rather than erroring.
fn every_matcher_hits_some(matchers: &[FuzzyMatcher], entries: &[String]) -> bool {
    matchers
        .iter()
        .all(|m| entries.iter().any(|entry| m.is_match(entry)))
}
