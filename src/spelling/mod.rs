//! Spelling suggestion processing for boolean search queries.
//!
//! This module turns the raw per-term corrections a search backend reports
//! into "Did you mean?" suggestions. A query is first split into terms and
//! phrases, the corrections are filtered and limited against those terms, and
//! the survivors are formatted for display, optionally as broadening
//! `(term OR candidate)` clauses or as fully corrected queries.

pub mod aggregator;
pub mod config;
pub mod correction;
pub mod formatter;
pub mod processor;
pub mod tokenizer;

// Re-export commonly used types
pub use aggregator::{SuggestionSet, TermSuggestions, aggregate};
pub use config::SpellingConfig;
pub use correction::{Candidate, RawCorrection};
pub use formatter::{DisplayCandidate, DisplaySuggestionSet, DisplayTerm, SuggestionDetail};
pub use processor::SpellingProcessor;
pub use tokenizer::{QueryTokenizer, tokenize};
