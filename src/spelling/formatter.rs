//! Display formatting of aggregated suggestions.
//!
//! Each retained candidate becomes a [`SuggestionDetail`] carrying the
//! replacement term and, optionally, a broadening `(term OR candidate)` clause.
//! In phrase mode the candidate is keyed by the whole corrected query instead
//! of the bare replacement, so it can be offered as a ready-to-run search.

use ahash::AHashSet;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::spelling::aggregator::SuggestionSet;
use crate::spelling::config::SpellingConfig;

/// Display record for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionDetail {
    /// Number of matches for the candidate.
    #[serde(rename = "freq")]
    pub frequency: u64,
    /// The replacement term.
    pub new_term: String,
    /// Clause matching either spelling, present when expansion is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_term: Option<String>,
}

/// A candidate keyed for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCandidate {
    /// The candidate itself, or the full corrected query in phrase mode.
    pub key: String,
    pub detail: SuggestionDetail,
}

/// Display records for one misspelled term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTerm {
    pub term: String,
    /// Number of matches for the misspelled term.
    pub frequency: u64,
    pub suggestions: Vec<DisplayCandidate>,
}

impl DisplayTerm {
    /// Look up a display record by its key.
    pub fn get(&self, key: &str) -> Option<&SuggestionDetail> {
        self.suggestions
            .iter()
            .find(|s| s.key == key)
            .map(|s| &s.detail)
    }

    /// Display keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.suggestions.iter().map(|s| s.key.as_str())
    }
}

impl Serialize for DisplayTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("freq", &self.frequency)?;
        map.serialize_entry("suggestions", &DisplayCandidates(&self.suggestions))?;
        map.end()
    }
}

/// Display records as a `key -> detail` map; a repeated key is written once,
/// at its first position.
struct DisplayCandidates<'a>(&'a [DisplayCandidate]);

impl Serialize for DisplayCandidates<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen = AHashSet::with_capacity(self.0.len());
        let mut map = serializer.serialize_map(None)?;
        for candidate in self.0 {
            if seen.insert(candidate.key.as_str()) {
                map.serialize_entry(&candidate.key, &candidate.detail)?;
            }
        }
        map.end()
    }
}

/// Display-ready suggestions for a query.
///
/// Serializes as an ordered `term -> {freq, suggestions}` map. The query and
/// handler the suggestions were built for are available through accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySuggestionSet {
    query: String,
    handler: String,
    terms: Vec<DisplayTerm>,
}

impl DisplaySuggestionSet {
    /// The original query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The search handler/field the suggestions apply to.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Display records for a term.
    pub fn get(&self, term: &str) -> Option<&DisplayTerm> {
        self.terms.iter().find(|t| t.term == term)
    }

    /// Iterate over terms in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DisplayTerm> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<'a> IntoIterator for &'a DisplaySuggestionSet {
    type Item = &'a DisplayTerm;
    type IntoIter = std::slice::Iter<'a, DisplayTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for DisplaySuggestionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.terms.len()))?;
        for term in &self.terms {
            map.serialize_entry(&term.term, term)?;
        }
        map.end()
    }
}

/// Build the broadening clause for a term and its replacement.
pub fn expand_clause(term: &str, candidate: &str) -> String {
    format!("({term} OR {candidate})")
}

/// Rebuild a query with the token at `position` replaced.
///
/// Tokens are re-joined with single spaces. An out-of-range position leaves
/// the tokens unchanged.
pub fn replace_token(tokens: &[String], position: usize, replacement: &str) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if i == position {
                replacement
            } else {
                token.as_str()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn aggregated suggestions into display records.
///
/// Terms that cannot be located in `query_tokens` are skipped. When a term
/// occurs more than once, phrase mode replaces the first occurrence.
pub fn format(
    suggestions: &SuggestionSet,
    query_tokens: &[String],
    query_text: &str,
    query_handler: &str,
    config: &SpellingConfig,
) -> DisplaySuggestionSet {
    let mut terms = Vec::with_capacity(suggestions.len());

    for entry in suggestions {
        let Some(position) = query_tokens.iter().position(|t| *t == entry.term) else {
            log::debug!("term {:?} not found in query {query_text:?}", entry.term);
            continue;
        };

        let mut seen = AHashSet::with_capacity(entry.candidates.len());
        let display = entry
            .candidates
            .iter()
            .filter(|candidate| seen.insert(candidate.term.as_str()))
            .map(|candidate| {
                let key = if config.phrase {
                    replace_token(query_tokens, position, &candidate.term)
                } else {
                    candidate.term.clone()
                };
                let expand_term = config
                    .expand
                    .then(|| expand_clause(&entry.term, &candidate.term));

                DisplayCandidate {
                    key,
                    detail: SuggestionDetail {
                        frequency: candidate.frequency,
                        new_term: candidate.term.clone(),
                        expand_term,
                    },
                }
            })
            .collect();

        terms.push(DisplayTerm {
            term: entry.term.clone(),
            frequency: entry.frequency,
            suggestions: display,
        });
    }

    DisplaySuggestionSet {
        query: query_text.to_string(),
        handler: query_handler.to_string(),
        terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::aggregator::TermSuggestions;
    use crate::spelling::correction::Candidate;
    use crate::spelling::tokenizer::tokenize;

    fn grumble_suggestions() -> SuggestionSet {
        [
            TermSuggestions {
                term: "grumble".to_string(),
                frequency: 2,
                candidates: vec![
                    Candidate::new("grumbler", 4),
                    Candidate::new("rumble", 40),
                    Candidate::new("crumble", 15),
                ],
            },
            TermSuggestions {
                term: "grimble".to_string(),
                frequency: 7,
                candidates: vec![
                    Candidate::new("trimble", 110),
                    Candidate::new("gribble", 21),
                    Candidate::new("grimsley", 24),
                ],
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_default_formatting() {
        let query = "grumble grimble";
        let display = format(
            &grumble_suggestions(),
            &tokenize(query),
            query,
            "AllFields",
            &SpellingConfig::default(),
        );

        assert_eq!(display.len(), 2);
        assert_eq!(display.handler(), "AllFields");
        assert_eq!(display.query(), query);

        let grumble = display.get("grumble").unwrap();
        assert_eq!(grumble.frequency, 2);
        assert_eq!(
            grumble.keys().collect::<Vec<_>>(),
            vec!["grumbler", "rumble", "crumble"]
        );
        assert_eq!(
            grumble.get("rumble"),
            Some(&SuggestionDetail {
                frequency: 40,
                new_term: "rumble".to_string(),
                expand_term: Some("(grumble OR rumble)".to_string()),
            })
        );
    }

    #[test]
    fn test_expand_disabled() {
        let query = "grumble grimble";
        let config = SpellingConfig::default().with_expand(false);
        let display = format(&grumble_suggestions(), &tokenize(query), query, "", &config);

        for term in &display {
            for candidate in &term.suggestions {
                assert!(candidate.detail.expand_term.is_none());
            }
        }
    }

    #[test]
    fn test_phrase_mode() {
        let query = "grumble grimble";
        let config = SpellingConfig::default().with_expand(false).with_phrase(true);
        let display = format(&grumble_suggestions(), &tokenize(query), query, "", &config);

        assert_eq!(
            display.get("grumble").unwrap().keys().collect::<Vec<_>>(),
            vec!["grumbler grimble", "rumble grimble", "crumble grimble"]
        );
        assert_eq!(
            display.get("grimble").unwrap().keys().collect::<Vec<_>>(),
            vec!["grumble trimble", "grumble gribble", "grumble grimsley"]
        );
        let detail = display.get("grumble").unwrap().get("grumbler grimble").unwrap();
        assert_eq!(detail.new_term, "grumbler");
        assert_eq!(detail.frequency, 4);
    }

    #[test]
    fn test_phrase_and_expand_are_orthogonal() {
        let query = "grumble grimble";
        let config = SpellingConfig::default().with_phrase(true);
        let display = format(&grumble_suggestions(), &tokenize(query), query, "", &config);

        let detail = display.get("grumble").unwrap().get("grumbler grimble").unwrap();
        assert_eq!(detail.expand_term.as_deref(), Some("(grumble OR grumbler)"));
    }

    #[test]
    fn test_phrase_mode_normalizes_query() {
        let query = "(grumble OR  \"old books\")\tAND grimble";
        let config = SpellingConfig::default().with_phrase(true);
        let display = format(&grumble_suggestions(), &tokenize(query), query, "", &config);

        assert_eq!(
            display.get("grumble").unwrap().keys().next(),
            Some("grumbler \"old books\" grimble")
        );
    }

    #[test]
    fn test_first_occurrence_replaced() {
        let query = "grumble OR grumble";
        let config = SpellingConfig::default().with_phrase(true);
        let display = format(&grumble_suggestions(), &tokenize(query), query, "", &config);

        assert_eq!(
            display.get("grumble").unwrap().keys().next(),
            Some("grumbler grumble")
        );
    }

    #[test]
    fn test_missing_term_skipped() {
        let query = "grumble";
        let display = format(
            &grumble_suggestions(),
            &tokenize(query),
            query,
            "",
            &SpellingConfig::default(),
        );
        assert_eq!(display.len(), 1);
        assert!(display.get("grimble").is_none());
    }

    #[test]
    fn test_replace_token() {
        let tokens = tokenize("a b c");
        assert_eq!(replace_token(&tokens, 1, "x"), "a x c");
        assert_eq!(replace_token(&tokens, 9, "x"), "a b c");
        assert_eq!(replace_token(&[], 0, "x"), "");
    }

    #[test]
    fn test_repeated_candidate_keyed_once() {
        let query = "grumble grimble";
        let suggestions: SuggestionSet = [TermSuggestions {
            term: "grumble".to_string(),
            frequency: 2,
            candidates: vec![
                Candidate::new("grumbler", 4),
                Candidate::new("rumble", 40),
                Candidate::new("grumbler", 99),
            ],
        }]
        .into_iter()
        .collect();

        for phrase in [false, true] {
            let config = SpellingConfig::default().with_phrase(phrase);
            let display = format(&suggestions, &tokenize(query), query, "", &config);
            let grumble = display.get("grumble").unwrap();
            assert_eq!(grumble.suggestions.len(), 2);
            assert_eq!(grumble.suggestions[0].detail.new_term, "grumbler");
            assert_eq!(grumble.suggestions[0].detail.frequency, 4);
        }

        let display = format(&suggestions, &tokenize(query), query, "", &SpellingConfig::default());
        assert_eq!(
            serde_json::to_string(&display).unwrap(),
            r#"{"grumble":{"freq":2,"suggestions":{"grumbler":{"freq":4,"new_term":"grumbler","expand_term":"(grumble OR grumbler)"},"rumble":{"freq":40,"new_term":"rumble","expand_term":"(grumble OR rumble)"}}}}"#
        );
    }

    #[test]
    fn test_serialize_writes_repeated_key_once() {
        let detail = |frequency| SuggestionDetail {
            frequency,
            new_term: "grumbler".to_string(),
            expand_term: None,
        };
        let term = DisplayTerm {
            term: "grumble".to_string(),
            frequency: 2,
            suggestions: vec![
                DisplayCandidate {
                    key: "grumbler".to_string(),
                    detail: detail(4),
                },
                DisplayCandidate {
                    key: "grumbler".to_string(),
                    detail: detail(99),
                },
            ],
        };
        assert_eq!(
            serde_json::to_string(&term).unwrap(),
            r#"{"freq":2,"suggestions":{"grumbler":{"freq":4,"new_term":"grumbler"}}}"#
        );
    }

    #[test]
    fn test_serialize_omits_missing_expand() {
        let query = "grumble";
        let suggestions: SuggestionSet = [TermSuggestions {
            term: "grumble".to_string(),
            frequency: 2,
            candidates: vec![Candidate::new("grumbler", 4)],
        }]
        .into_iter()
        .collect();

        let expanded = format(&suggestions, &tokenize(query), query, "", &SpellingConfig::default());
        assert_eq!(
            serde_json::to_string(&expanded).unwrap(),
            r#"{"grumble":{"freq":2,"suggestions":{"grumbler":{"freq":4,"new_term":"grumbler","expand_term":"(grumble OR grumbler)"}}}}"#
        );

        let config = SpellingConfig::default().with_expand(false);
        let plain = format(&suggestions, &tokenize(query), query, "", &config);
        assert_eq!(
            serde_json::to_string(&plain).unwrap(),
            r#"{"grumble":{"freq":2,"suggestions":{"grumbler":{"freq":4,"new_term":"grumbler"}}}}"#
        );
    }
}
