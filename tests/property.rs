//! Property-based tests using proptest.
//!
//! These exercise the invariants that must hold for arbitrary catalogs and
//! arbitrary query strings, not just the handwritten fixtures.

mod common;

use common::record;
use episeek::{build_corpus, search, suggest, tokenize, FuzzyMatcher, Record, Token};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate word-like fragments in the scripts the catalog actually uses.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{1,6}").unwrap(),
        prop::string::string_regex("[가-힣]{1,4}").unwrap(),
        prop::sample::select(vec![
            "뽀로로".to_string(),
            "에디".to_string(),
            "우주".to_string(),
            "친구".to_string(),
            "pororo".to_string(),
            "eddy".to_string(),
        ]),
    ]
}

/// Keyword values as stored: sometimes several fragments joined by commas,
/// the way exported catalogs encode them.
fn keyword_value_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..3).prop_map(|words| words.join(","))
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            word_strategy(),
            prop::collection::vec(keyword_value_strategy(), 0..3),
            prop::collection::vec(word_strategy(), 0..3),
        ),
        0..10,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, keywords, characters))| {
                let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
                let characters: Vec<&str> = characters.iter().map(String::as_str).collect();
                record(i as u32, &title, &keywords, &characters)
            })
            .collect()
    })
}

/// Raw queries, including delimiter runs and empty strings.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            word_strategy(),
            Just(" ".to_string()),
            Just(",".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn repeated_searches_agree(catalog in catalog_strategy(), query in query_strategy()) {
        let corpus = build_corpus(catalog);
        let tokens = tokenize(&query);
        prop_assert_eq!(
            search(&tokens, &corpus.records),
            search(&tokens, &corpus.records)
        );
    }

    #[test]
    fn every_result_satisfies_some_field(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let corpus = build_corpus(catalog);
        let tokens = tokenize(&query);
        prop_assume!(!tokens.is_empty());
        let matchers: Vec<FuzzyMatcher> = tokens.iter().map(FuzzyMatcher::compile).collect();

        for result in search(&tokens, &corpus.records) {
            let title_hit = matchers.iter().all(|m| m.is_match(&result.title));
            let character_hit = matchers
                .iter()
                .all(|m| result.characters.iter().any(|c| m.is_match(c)));
            let keyword_hit = matchers
                .iter()
                .all(|m| result.keywords.iter().any(|k| m.is_match(k)));
            prop_assert!(title_hit || character_hit || keyword_hit);
        }
    }

    #[test]
    fn results_never_grow_the_catalog(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let corpus = build_corpus(catalog.clone());
        let results = search(&tokenize(&query), &corpus.records);
        prop_assert!(results.len() <= catalog.len());
        for result in results {
            prop_assert!(catalog.contains(&result));
        }
    }

    #[test]
    fn title_only_matches_keep_relative_order(
        titles in prop::collection::vec("[a-z]{3,8}", 2..6),
        needle in "[a-z]{1,2}",
    ) {
        // Records whose only searchable field is the title: every match
        // scores exactly the title weight, so input order must survive.
        let catalog: Vec<Record> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| record(i as u32, title, &[], &[]))
            .collect();
        let corpus = build_corpus(catalog);
        let results = search(&tokenize(&needle), &corpus.records);
        let serials: Vec<u32> = results.iter().map(|r| r.serial).collect();
        let mut sorted = serials.clone();
        sorted.sort_unstable();
        prop_assert_eq!(serials, sorted);
    }

    #[test]
    fn suggestions_filter_the_full_set(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let corpus = build_corpus(catalog);
        let all = suggest(&[], &corpus.vocabulary);
        prop_assert_eq!(&all, &corpus.vocabulary);

        let filtered = suggest(&tokenize(&query), &corpus.vocabulary);
        prop_assert!(filtered.len() <= all.len());
        prop_assert!(filtered.iter().all(|entry| all.contains(entry)));
    }

    #[test]
    fn vocabulary_entries_are_normalized(catalog in catalog_strategy()) {
        let corpus = build_corpus(catalog);
        let mut seen = std::collections::HashSet::new();
        for entry in &corpus.vocabulary {
            prop_assert!(!entry.is_empty());
            prop_assert!(!entry.contains([' ', ',']));
            prop_assert!(seen.insert(entry.clone()), "duplicate {entry:?}");
        }
    }

    #[test]
    fn matcher_agrees_with_reference_scan(
        token_text in "[a-z가-힣.*()]{1,6}",
        candidate in "[a-zA-Z가-힣.*() ]{0,16}",
    ) {
        // Oracle: independent two-pointer walk over folded chars.
        let token = Token::new(&token_text);
        prop_assume!(token.is_some());
        let token = token.unwrap();

        let needle: Vec<char> = token.as_str().to_lowercase().chars().collect();
        let hay: Vec<char> = candidate.to_lowercase().chars().collect();
        let mut i = 0;
        for &c in &hay {
            if i < needle.len() && needle[i] == c {
                i += 1;
            }
        }
        let expected = i == needle.len();

        let matcher = FuzzyMatcher::compile(&token);
        prop_assert_eq!(matcher.is_match(&candidate), expected);
    }

    #[test]
    fn tokenization_is_stable_under_extra_delimiters(words in prop::collection::vec("[a-z가-힣]{1,5}", 0..5)) {
        let spaced = words.join(" ");
        let noisy = words.join(" ,,  ");
        prop_assert_eq!(tokenize(&spaced), tokenize(&noisy));
    }
}
