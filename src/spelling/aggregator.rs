//! Filtering and limiting of backend corrections.
//!
//! The aggregator turns the backend's per-term correction data into a
//! [`SuggestionSet`]: numeric terms are optionally dropped, terms no longer
//! present in the query are dropped, and each term keeps only a prefix of its
//! candidates.

use ahash::{AHashMap, AHashSet};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::spelling::config::SpellingConfig;
use crate::spelling::correction::{Candidate, RawCorrection};

/// Retained candidates for a single misspelled term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSuggestions {
    /// The misspelled term.
    pub term: String,
    /// Number of matches for the misspelled term.
    pub frequency: u64,
    /// Candidates in backend order.
    pub candidates: Vec<Candidate>,
}

impl TermSuggestions {
    /// Look up the frequency of a retained candidate.
    pub fn candidate_frequency(&self, candidate: &str) -> Option<u64> {
        self.candidates
            .iter()
            .find(|c| c.term == candidate)
            .map(|c| c.frequency)
    }
}

impl Serialize for TermSuggestions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("freq", &self.frequency)?;
        map.serialize_entry("suggestions", &CandidateFrequencies(&self.candidates))?;
        map.end()
    }
}

/// Candidates as a `candidate -> frequency` map; a repeated candidate is
/// written once, at its first position.
struct CandidateFrequencies<'a>(&'a [Candidate]);

impl Serialize for CandidateFrequencies<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen = AHashSet::with_capacity(self.0.len());
        let mut map = serializer.serialize_map(None)?;
        for candidate in self.0 {
            if seen.insert(candidate.term.as_str()) {
                map.serialize_entry(&candidate.term, &candidate.frequency)?;
            }
        }
        map.end()
    }
}

/// Ordered mapping from misspelled term to its retained candidates.
///
/// Terms keep the order in which they first appeared in the correction data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    entries: Vec<TermSuggestions>,
    index: AHashMap<String, usize>,
}

impl SuggestionSet {
    /// Create an empty suggestion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert suggestions for a term.
    ///
    /// Returns `false` and leaves the set untouched if the term is already
    /// present.
    pub fn insert(&mut self, suggestions: TermSuggestions) -> bool {
        if self.index.contains_key(&suggestions.term) {
            return false;
        }
        self.index
            .insert(suggestions.term.clone(), self.entries.len());
        self.entries.push(suggestions);
        true
    }

    /// Suggestions for a term, if it was retained.
    pub fn get(&self, term: &str) -> Option<&TermSuggestions> {
        self.index.get(term).map(|&i| &self.entries[i])
    }

    /// Whether the term was retained.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Retained terms in order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }

    /// Iterate over the retained entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TermSuggestions> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a TermSuggestions;
    type IntoIter = std::slice::Iter<'a, TermSuggestions>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TermSuggestions> for SuggestionSet {
    fn from_iter<I: IntoIterator<Item = TermSuggestions>>(iter: I) -> Self {
        let mut set = SuggestionSet::new();
        for suggestions in iter {
            set.insert(suggestions);
        }
        set
    }
}

impl Serialize for SuggestionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.term, entry)?;
        }
        map.end()
    }
}

/// Filter and limit backend corrections against the tokenized query.
pub fn aggregate(
    corrections: &[RawCorrection],
    query_tokens: &[String],
    config: &SpellingConfig,
) -> SuggestionSet {
    let present: AHashSet<&str> = query_tokens.iter().map(String::as_str).collect();
    let mut set = SuggestionSet::new();

    for correction in corrections {
        if config.skip_numeric && correction.is_numeric() {
            log::trace!("skipping numeric term {:?}", correction.term);
            continue;
        }
        if !present.contains(correction.term.as_str()) {
            log::debug!("skipping stale term {:?} not in query", correction.term);
            continue;
        }

        let mut seen = AHashSet::with_capacity(correction.candidates.len());
        let candidates: Vec<Candidate> = correction
            .candidates
            .iter()
            .filter(|c| seen.insert(c.term.as_str()))
            .take(config.limit)
            .cloned()
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let inserted = set.insert(TermSuggestions {
            term: correction.term.clone(),
            frequency: correction.frequency,
            candidates,
        });
        if !inserted {
            log::debug!("ignoring repeated correction for {:?}", correction.term);
        }
    }

    set
}
