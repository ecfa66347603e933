//! Spelling processor tying tokenization, aggregation and formatting together.

use crate::spelling::aggregator::{self, SuggestionSet};
use crate::spelling::config::SpellingConfig;
use crate::spelling::correction::RawCorrection;
use crate::spelling::formatter::{self, DisplaySuggestionSet};
use crate::spelling::tokenizer::QueryTokenizer;

/// Turns backend corrections into display suggestions under a fixed configuration.
///
/// The processor holds no per-request state and can be shared across threads.
///
/// ```
/// use spellmend::spelling::{RawCorrection, SpellingProcessor};
///
/// let processor = SpellingProcessor::default();
/// let corrections = vec![
///     RawCorrection::new("grumble", 2)
///         .with_candidate("grumbler", 4)
///         .with_candidate("rumble", 40),
/// ];
///
/// let display = processor.correct(&corrections, "grumble grimble", "AllFields");
/// let detail = display.get("grumble").unwrap().get("rumble").unwrap();
/// assert_eq!(detail.expand_term.as_deref(), Some("(grumble OR rumble)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpellingProcessor {
    config: SpellingConfig,
    tokenizer: QueryTokenizer,
}

impl SpellingProcessor {
    /// Create a processor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with the given configuration.
    pub fn with_config(config: SpellingConfig) -> Self {
        SpellingProcessor {
            config,
            tokenizer: QueryTokenizer::new(),
        }
    }

    pub fn config(&self) -> &SpellingConfig {
        &self.config
    }

    /// Maximum number of candidates kept per term.
    pub fn spelling_limit(&self) -> usize {
        self.config.limit
    }

    pub fn should_skip_numeric(&self) -> bool {
        self.config.skip_numeric
    }

    pub fn should_expand(&self) -> bool {
        self.config.expand
    }

    pub fn use_phrase(&self) -> bool {
        self.config.phrase
    }

    /// Split a query into terms and phrases.
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        self.tokenizer.tokenize(query)
    }

    /// Filter and limit backend corrections for `query`.
    pub fn suggestions(&self, corrections: &[RawCorrection], query: &str) -> SuggestionSet {
        let tokens = self.tokenize(query);
        aggregator::aggregate(corrections, &tokens, &self.config)
    }

    /// Format aggregated suggestions for display against `query`.
    pub fn process_suggestions(
        &self,
        suggestions: &SuggestionSet,
        query: &str,
        handler: &str,
    ) -> DisplaySuggestionSet {
        let tokens = self.tokenize(query);
        formatter::format(suggestions, &tokens, query, handler, &self.config)
    }

    /// Run the full pipeline on one request.
    pub fn correct(
        &self,
        corrections: &[RawCorrection],
        query: &str,
        handler: &str,
    ) -> DisplaySuggestionSet {
        let tokens = self.tokenize(query);
        let suggestions = aggregator::aggregate(corrections, &tokens, &self.config);
        log::debug!(
            "{} of {} corrections retained for {query:?}",
            suggestions.len(),
            corrections.len()
        );
        formatter::format(&suggestions, &tokens, query, handler, &self.config)
    }
}
