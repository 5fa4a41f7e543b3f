// Tally engine: projects the raw vote list into ranked results, cohort
// participation and hour-of-day buckets. Recomputed from scratch on every call.

use crate::identity::{cohort_of, CredentialPolicy};
use crate::model::election::{Roster, VoteRecord};
use crate::model::voter::Role;
use chrono::{Local, TimeZone, Timelike};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the ranked result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTally {
    pub candidate_id: String,
    pub name: String,
    pub vote_count: u64,
    pub percentage: f64,
}

/// Votes per cohort, inferred from voter id shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortCounts {
    pub student: u64,
    pub teacher: u64,
    pub supervisor: u64,
}

impl CohortCounts {
    fn record(&mut self, cohort: Role) {
        match cohort {
            Role::Student => self.student += 1,
            Role::Teacher => self.teacher += 1,
            Role::Supervisor => self.supervisor += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.student + self.teacher + self.supervisor
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub label: String,
    pub hour: u32,
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub total_votes: u64,
    pub results: Vec<CandidateTally>,
    pub cohorts: CohortCounts,
    /// Only hours with at least one vote, in order of first occurrence.
    pub hourly: Vec<HourBucket>,
}

impl Tally {
    /// Top of the ranking, or `None` while nobody has voted.
    pub fn winner(&self) -> Option<&CandidateTally> {
        if self.total_votes == 0 {
            return None;
        }
        self.results.first()
    }

    /// Votes whose voter id fits none of the cohort shapes.
    pub fn unclassified(&self) -> u64 {
        self.total_votes - self.cohorts.total()
    }
}

/// Tally in the machine's local time zone.
pub fn tally(roster: &Roster, votes: &[VoteRecord]) -> Tally {
    tally_in(&Local, roster, votes)
}

pub fn tally_in<Tz: TimeZone>(tz: &Tz, roster: &Roster, votes: &[VoteRecord]) -> Tally {
    let policy = CredentialPolicy::default();
    let total_votes = votes.len() as u64;

    let mut vote_counts: HashMap<&str, u64> = roster
        .candidates()
        .iter()
        .map(|c| (c.id.as_str(), 0))
        .collect();

    let mut cohorts = CohortCounts::default();
    let mut hourly: Vec<HourBucket> = Vec::new();

    for vote in votes {
        // Votes for unknown candidates still count toward the total.
        if let Some(count) = vote_counts.get_mut(vote.candidate_id.as_str()) {
            *count += 1;
        }

        if let Some(cohort) = cohort_of(&vote.voter_id, &policy) {
            cohorts.record(cohort);
        }

        let hour = vote.cast_at.with_timezone(tz).hour();
        match hourly.iter_mut().find(|bucket| bucket.hour == hour) {
            Some(bucket) => bucket.votes += 1,
            None => hourly.push(HourBucket {
                label: format!("{}:00", hour),
                hour,
                votes: 1,
            }),
        }
    }

    // sorted_by is stable, so ties keep roster order.
    let results = roster
        .candidates()
        .iter()
        .map(|candidate| {
            let vote_count = vote_counts[candidate.id.as_str()];
            CandidateTally {
                candidate_id: candidate.id.clone(),
                name: candidate.name.clone(),
                vote_count,
                percentage: percentage(vote_count, total_votes),
            }
        })
        .sorted_by(|a, b| b.vote_count.cmp(&a.vote_count))
        .collect();

    Tally {
        total_votes,
        results,
        cohorts,
        hourly,
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
