//! # spellmend
//!
//! "Did you mean?" suggestions for boolean search queries.
//!
//! A search backend reports the terms of a query it believes are misspelled,
//! together with replacement candidates and their match counts. spellmend
//! turns that raw data into display-ready suggestions:
//!
//! - Boolean query tokenization (quoted phrases, grouping, `AND`/`OR`/`NOT`)
//! - Filtering of numeric and stale terms, with per-term candidate limits
//! - Broadening `(term OR candidate)` clauses and fully corrected queries
//!
//! ```
//! use spellmend::spelling::{RawCorrection, SpellingConfig, SpellingProcessor};
//!
//! let processor = SpellingProcessor::with_config(SpellingConfig::default().with_phrase(true));
//! let corrections = vec![RawCorrection::new("grumble", 2).with_candidate("grumbler", 4)];
//!
//! let display = processor.correct(&corrections, "grumble grimble", "AllFields");
//! let keys: Vec<&str> = display.get("grumble").unwrap().keys().collect();
//! assert_eq!(keys, vec!["grumbler grimble"]);
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, SpellmendError};
    pub use crate::spelling::{
        DisplaySuggestionSet, RawCorrection, SpellingConfig, SpellingProcessor, SuggestionSet,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
