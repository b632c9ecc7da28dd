//! Fuzzy multi-keyword search over a video episode catalog.
//!
//! Users type free-text, space/comma-separated keywords; matching tolerates
//! partial input via ordered-subsequence containment, and results rank by
//! which fields matched (title beats characters beats keywords).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ tokenizer.rs │────▶│  fuzzy.rs   │────▶│    search.rs     │
//! │  (tokenize)  │     │(FuzzyMatcher│  ┌─▶│ (ranked search)  │
//! └──────────────┘     │  compile/   │  │  └──────────────────┘
//!                      │  is_match)  │  │  ┌──────────────────┐
//! ┌──────────────┐     └──────┬──────┘  │  │   suggest.rs     │
//! │   index.rs   │            └─────────┴─▶│  (autocomplete)  │
//! │(build_corpus)│───── Corpus ─────────┘  └──────────────────┘
//! └──────────────┘
//! ```
//!
//! Everything is a pure, synchronous computation over immutable inputs.
//! The corpus is built once at load time and shared read-only; each
//! `search`/`suggest` call allocates its own matchers, so concurrent calls
//! never interfere and every call returns a complete result for the tokens
//! it was given.
//!
//! # Usage
//!
//! ```
//! use episeek::{build_corpus, search, suggest, tokenize, Record};
//!
//! let records = vec![Record {
//!     serial: 1,
//!     title: "바다 탐험".to_string(),
//!     category: "동요".to_string(),
//!     season: "S1".to_string(),
//!     media_id: "abc123".to_string(),
//!     keywords: vec!["바다".to_string()],
//!     characters: vec!["뽀로로".to_string()],
//! }];
//! let corpus = build_corpus(records);
//!
//! let tokens = tokenize("바다");
//! let results = search(&tokens, &corpus.records);
//! assert_eq!(results[0].serial, 1);
//!
//! let options = suggest(&tokens, &corpus.vocabulary);
//! assert_eq!(options, vec!["바다"]);
//! ```

// Module declarations
mod fuzzy;
mod index;
mod scoring;
mod search;
mod suggest;
mod tokenizer;
mod types;

// Re-exports for public API
pub use fuzzy::FuzzyMatcher;
pub use index::build_corpus;
pub use scoring::{score, CHARACTER_WEIGHT, KEYWORD_WEIGHT, TITLE_WEIGHT};
pub use search::search;
pub use suggest::suggest;
pub use tokenizer::tokenize;
pub use types::{Corpus, IndexedRecord, Record, Token, Vocabulary, DELIMITERS};
