// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus indexing: one pass over the loaded records.
//!
//! Two derived structures come out of it:
//!
//! 1. per record, the `search_index` - the deduplicated union of title,
//!    keywords, and characters, used by the search engine as a fast
//!    whole-record reject;
//! 2. for the whole corpus, the vocabulary universe - every keyword and
//!    character fragment, split on delimiters, deduplicated in
//!    first-observed order. Feeds autocomplete.
//!
//! `build_corpus` is a pure function of its input: re-running it on the
//! same records yields an identical `Corpus`. It runs once at load time,
//! but nothing here prevents rebuilding if the dataset changes.

use std::collections::HashSet;

use crate::types::{Corpus, IndexedRecord, Record, Vocabulary, DELIMITERS};

/// Index a record set: derive each record's searchable field union and the
/// corpus-wide vocabulary universe.
pub fn build_corpus(records: Vec<Record>) -> Corpus {
    let vocabulary = build_vocabulary(&records);
    let records = records
        .into_iter()
        .map(|record| {
            let search_index = unique(
                std::iter::once(record.title.clone())
                    .chain(record.keywords.iter().cloned())
                    .chain(record.characters.iter().cloned()),
            );
            IndexedRecord {
                record,
                search_index,
            }
        })
        .collect();

    Corpus {
        records,
        vocabulary,
    }
}

/// Collect every keyword/character fragment across the corpus.
///
/// Values like `"우주,친구"` split into two vocabulary entries; the same
/// fragment appearing on many records is kept once, at the position of its
/// first appearance.
fn build_vocabulary(records: &[Record]) -> Vocabulary {
    unique(
        records
            .iter()
            .flat_map(|record| record.keywords.iter().chain(record.characters.iter()))
            .flat_map(|value| value.split(DELIMITERS.as_slice()))
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string),
    )
}

/// Deduplicate preserving first-seen order.
fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}
