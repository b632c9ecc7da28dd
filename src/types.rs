// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model: catalog records and the derived search structures.
//!
//! | Type            | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `Record`        | One catalog entry (episode) as loaded          |
//! | `Token`         | One normalized query fragment                  |
//! | `IndexedRecord` | Record + its deduplicated searchable field set |
//! | `Corpus`        | Indexed records + the vocabulary universe      |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Token**: non-empty and delimiter-free. Enforced at construction -
//!   `Token::new` is the only way in, so the fuzzy matcher never sees an
//!   empty needle.
//! - **IndexedRecord**: `search_index` is the deduplicated union of title,
//!   keywords, and characters. Derived, never mutated after indexing.
//! - **Vocabulary**: every entry is non-empty and delimiter-free, order is
//!   first-observed during indexing, no duplicates.

use serde::{Deserialize, Serialize};

/// Query delimiter characters: a query splits on runs of these.
pub const DELIMITERS: [char; 2] = [' ', ','];

/// One catalog entry. Immutable once loaded.
///
/// Wire format is camelCase JSON. `media_id` is opaque to the search core;
/// presentation uses it verbatim (thumbnail URLs, links). Datasets exported
/// from the original player use `youtubeId` for the same field, hence the
/// alias. Absent `keywords`/`characters` deserialize as empty - malformed
/// records are tolerated, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Curated display order. Input order of the corpus follows this.
    pub serial: u32,
    pub title: String,
    pub category: String,
    pub season: String,
    #[serde(alias = "youtubeId")]
    pub media_id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub characters: Vec<String>,
}

/// One normalized query fragment: trimmed, non-empty, delimiter-free.
///
/// Only constructible through [`Token::new`] (or the tokenizer, which uses
/// it). This makes "compile a matcher from an empty token" unrepresentable
/// rather than a runtime fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Trim `raw` and accept it as a token if the result is non-empty and
    /// contains no delimiter characters.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains(DELIMITERS.as_slice()) {
            None
        } else {
            Some(Token(trimmed.to_string()))
        }
    }

    /// The token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record plus its derived searchable field set.
///
/// `search_index` is the deduplicated union of `title`, all `keywords`, and
/// all `characters` (first-seen order, though order is irrelevant to
/// matching). The search engine uses it as a fast whole-record reject
/// before per-field scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub record: Record,
    pub search_index: Vec<String>,
}

/// The vocabulary universe: every keyword/character fragment across the
/// corpus, split on delimiters, deduplicated, in first-observed order.
/// Feeds autocomplete suggestions only.
pub type Vocabulary = Vec<String>;

/// Output of corpus indexing: what the search and suggestion engines read.
/// Built once per dataset load, then treated as read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub records: Vec<IndexedRecord>,
    pub vocabulary: Vocabulary,
}
