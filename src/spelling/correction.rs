//! Raw correction data as reported by a search backend.

use serde::{Deserialize, Serialize};

/// A replacement suggested by the backend for a misspelled term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested term.
    pub term: String,
    /// Number of matches the suggested term would produce.
    pub frequency: u64,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(term: S, frequency: u64) -> Self {
        Candidate {
            term: term.into(),
            frequency,
        }
    }
}

/// One misspelled term together with the backend's candidates for it.
///
/// Candidates keep the order the backend supplied; nothing in this crate
/// re-ranks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCorrection {
    /// The term as it appeared in the query.
    pub term: String,
    /// Number of matches for the original term.
    #[serde(default)]
    pub frequency: u64,
    /// Replacement candidates in backend order.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl RawCorrection {
    /// Create a correction with no candidates.
    pub fn new<S: Into<String>>(term: S, frequency: u64) -> Self {
        RawCorrection {
            term: term.into(),
            frequency,
            candidates: Vec::new(),
        }
    }

    /// Append a candidate, keeping backend order.
    pub fn with_candidate<S: Into<String>>(mut self, term: S, frequency: u64) -> Self {
        self.candidates.push(Candidate::new(term, frequency));
        self
    }

    /// Whether the term is made up solely of ASCII decimal digits.
    pub fn is_numeric(&self) -> bool {
        !self.term.is_empty() && self.term.chars().all(|c| c.is_ascii_digit())
    }
}
