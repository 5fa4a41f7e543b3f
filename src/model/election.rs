use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub position: String,
}

impl Candidate {
    pub fn new(id: &str, name: &str, position: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            position: position.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Roster has no candidates")]
    Empty,
    #[error("Duplicate candidate id: {0}")]
    DuplicateCandidate(String),
}

/// Ordered, fixed list of candidates for one election.
///
/// The declaration order matters: it breaks ties when ranking results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// An empty roster is valid; it tallies to an empty result table.
    pub fn new(candidates: Vec<Candidate>) -> Result<Roster, RosterError> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(RosterError::DuplicateCandidate(candidate.id.clone()));
            }
        }

        Ok(Roster { candidates })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for Roster {
    /// The 2025-2026 OSIS chair ballot.
    fn default() -> Self {
        let candidates = [
            ("1", "RAFAEL"),
            ("2", "ZAKA"),
            ("3", "JULIA"),
            ("4", "FADHIL"),
            ("5", "RESTU"),
            ("6", "GADIS"),
        ]
        .iter()
        .map(|(id, name)| Candidate::new(id, name, "KETUA"))
        .collect();

        Roster { candidates }
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let candidates = Vec::<Candidate>::deserialize(deserializer)?;
        Roster::new(candidates).map_err(serde::de::Error::custom)
    }
}

/// A single cast ballot. Records are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub voter_id: String,
    pub candidate_id: String,
    pub cast_at: DateTime<Utc>,
}

impl VoteRecord {
    pub fn new(voter_id: &str, candidate_id: &str, cast_at: DateTime<Utc>) -> VoteRecord {
        VoteRecord {
            voter_id: voter_id.to_string(),
            candidate_id: candidate_id.to_string(),
            cast_at,
        }
    }
}
