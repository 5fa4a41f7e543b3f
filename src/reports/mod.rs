use crate::model::election::{Roster, RosterError, VoteRecord};
use crate::reports::tabulation::{CandidateTally, CohortCounts, HourBucket};
use crate::util::{read_serialized, write_serialized};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod generator;
pub mod tabulation;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Full results report, as shown on the supervisor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsReport {
    pub info: ElectionInfo,
    pub total_votes: u64,
    pub results: Vec<CandidateTally>,
    pub cohorts: CohortCounts,
    pub unclassified: u64,
    pub hourly: Vec<HourBucket>,
    pub summary: ResultSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionInfo {
    pub name: String,
    pub period: String,
    pub num_candidates: u64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub winner: Option<CandidateTally>,
}

/// Load a roster file, or fall back to the built-in ballot. A ballot file
/// must name at least one candidate.
pub fn load_roster(path: Option<&Path>) -> ReportResult<Roster> {
    let path = match path {
        Some(path) => path,
        None => return Ok(Roster::default()),
    };

    let roster: Roster = read_serialized(path)?;
    if roster.is_empty() {
        return Err(RosterError::Empty.into());
    }
    Ok(roster)
}

/// Load a vote list written by `session --export` or by hand.
pub fn load_votes(path: &Path) -> ReportResult<Vec<VoteRecord>> {
    read_serialized(path)
}

pub fn save_votes(path: &Path, votes: &[VoteRecord]) -> ReportResult<()> {
    write_serialized(path, &votes)
}
