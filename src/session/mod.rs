//! Caller-owned election state: the roster, the append-only vote list and
//! whoever is logged in right now.

use crate::identity::{self, Rejected};
use crate::model::election::{Roster, VoteRecord};
use crate::model::voter::Voter;
use crate::reports::generator::generate_report;
use crate::reports::ResultsReport;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Not allowed for role {0}")]
    Forbidden(String),
    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),
    #[error("Voter {0} has already voted")]
    AlreadyVoted(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, Default)]
pub struct Session {
    roster: Roster,
    votes: Vec<VoteRecord>,
    current: Option<Voter>,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            votes: Vec::new(),
            current: None,
        }
    }

    /// Resume from a previously exported vote list.
    pub fn with_votes(roster: Roster, votes: Vec<VoteRecord>) -> Self {
        Self {
            roster,
            votes,
            current: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn votes(&self) -> &[VoteRecord] {
        &self.votes
    }

    pub fn current_voter(&self) -> Option<&Voter> {
        self.current.as_ref()
    }

    /// Uppercase the username the way the login form does, then validate.
    /// A rejected attempt leaves the current login untouched.
    pub fn login(
        &mut self,
        role: &str,
        username: &str,
        password: &str,
    ) -> std::result::Result<&Voter, Rejected> {
        let username = username.to_uppercase();
        let voter = identity::validate(role, &username, password)?;
        info!(voter = %voter.id, role = %voter.role, "login accepted");
        let voter: &Voter = self.current.insert(voter);
        Ok(voter)
    }

    pub fn logout(&mut self) -> Option<Voter> {
        self.current.take()
    }

    pub fn cast_vote(&mut self, candidate_id: &str, cast_at: DateTime<Utc>) -> Result<&VoteRecord> {
        let voter = self.current.as_mut().ok_or(SessionError::NotLoggedIn)?;
        append_vote(&self.roster, &mut self.votes, voter, candidate_id, cast_at)
    }

    /// Supervisor-only view of the results, recomputed on every call.
    pub fn results(&self) -> Result<ResultsReport> {
        match &self.current {
            None => Err(SessionError::NotLoggedIn),
            Some(voter) if voter.role.can_vote() => {
                Err(SessionError::Forbidden(voter.role.to_string()))
            }
            Some(_) => Ok(generate_report(&self.roster, &self.votes)),
        }
    }
}

fn append_vote<'a>(
    roster: &Roster,
    votes: &'a mut Vec<VoteRecord>,
    voter: &mut Voter,
    candidate_id: &str,
    cast_at: DateTime<Utc>,
) -> Result<&'a VoteRecord> {
    if !voter.role.can_vote() {
        return Err(SessionError::Forbidden(voter.role.to_string()));
    }
    if roster.get(candidate_id).is_none() {
        return Err(SessionError::UnknownCandidate(candidate_id.to_string()));
    }
    // A fresh login always starts with has_voted = false, so the ledger
    // is the authority on whether this id has already cast a ballot.
    if voter.has_voted || votes.iter().any(|v| v.voter_id == voter.id) {
        warn!(voter = %voter.id, "duplicate vote refused");
        voter.mark_voted();
        return Err(SessionError::AlreadyVoted(voter.id.clone()));
    }

    votes.push(VoteRecord::new(&voter.id, candidate_id, cast_at));
    voter.mark_voted();
    info!(voter = %voter.id, candidate = candidate_id, "vote cast");

    Ok(&votes[votes.len() - 1])
}

/// A session shared between concurrent callers.
///
/// Every operation runs under one lock, so the has-voted check and the
/// append happen in the same critical section.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// A poisoned lock still holds a consistent vote list: every mutation is
    /// a single push or flag flip.
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Validate a credential and cast a single vote. The duplicate check and
    /// the append share one critical section; whoever is logged in on the
    /// session stays logged in.
    pub fn vote_as(
        &self,
        role: &str,
        username: &str,
        password: &str,
        candidate_id: &str,
        cast_at: DateTime<Utc>,
    ) -> std::result::Result<VoteRecord, VoteError> {
        let mut voter = identity::validate(role, &username.to_uppercase(), password)?;

        let mut guard = self.lock();
        let session = &mut *guard;
        let record = append_vote(
            &session.roster,
            &mut session.votes,
            &mut voter,
            candidate_id,
            cast_at,
        )?;
        Ok(record.clone())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    #[error(transparent)]
    Rejected(#[from] Rejected),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::voter::Role;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn login_uppercases_username() {
        let mut session = Session::default();
        let voter = session.login("student", "7a01", "24").unwrap();
        assert_eq!(voter.id, "7A01");
        assert_eq!(voter.role, Role::Student);
    }

    #[test]
    fn rejected_login_keeps_previous_state() {
        let mut session = Session::default();
        session.login("teacher", "GURU5", "24").unwrap();
        assert_eq!(session.login("teacher", "GURU5", "nope"), Err(Rejected));
        assert_eq!(session.current_voter().map(|v| v.id.as_str()), Some("GURU5"));
    }

    #[test]
    fn voter_casts_exactly_once() {
        let mut session = Session::default();
        session.login("student", "8B15", "24").unwrap();

        let record = session.cast_vote("2", now()).unwrap();
        assert_eq!(record.voter_id, "8B15");
        assert!(session.current_voter().unwrap().has_voted);

        assert_eq!(
            session.cast_vote("3", now()),
            Err(SessionError::AlreadyVoted("8B15".to_string()))
        );
        assert_eq!(session.votes().len(), 1);
    }

    #[test]
    fn logging_in_again_does_not_allow_second_vote() {
        let mut session = Session::default();
        session.login("student", "8B15", "24").unwrap();
        session.cast_vote("2", now()).unwrap();
        session.logout();

        session.login("student", "8B15", "24").unwrap();
        assert!(matches!(
            session.cast_vote("2", now()),
            Err(SessionError::AlreadyVoted(_))
        ));
        assert!(session.current_voter().unwrap().has_voted);
        assert_eq!(session.votes().len(), 1);
    }

    #[test]
    fn vote_requires_login_and_known_candidate() {
        let mut session = Session::default();
        assert_eq!(session.cast_vote("1", now()), Err(SessionError::NotLoggedIn));

        session.login("teacher", "GURU10", "24").unwrap();
        assert_eq!(
            session.cast_vote("99", now()),
            Err(SessionError::UnknownCandidate("99".to_string()))
        );
        assert!(!session.current_voter().unwrap().has_voted);
    }

    #[test]
    fn supervisor_sees_results_but_cannot_vote() {
        let mut session = Session::default();
        session.login("student", "9G32", "24").unwrap();
        session.cast_vote("4", now()).unwrap();
        assert_eq!(
            session.results().unwrap_err(),
            SessionError::Forbidden("student".to_string())
        );

        session.login("supervisor", "PENGAWAS", "OSISSPENDAG").unwrap();
        assert!(matches!(
            session.cast_vote("4", now()),
            Err(SessionError::Forbidden(_))
        ));

        let report = session.results().unwrap();
        assert_eq!(report.total_votes, 1);
        assert_eq!(report.summary.winner.unwrap().name, "FADHIL");
    }

    #[test]
    fn shared_session_serializes_concurrent_votes() {
        let shared = SharedSession::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.vote_as("student", "7C07", "24", "1", now()))
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(shared.lock().votes().len(), 1);
        assert!(shared.lock().current_voter().is_none());
    }

    #[test]
    fn shared_vote_keeps_current_login() {
        let shared = SharedSession::default();
        shared
            .lock()
            .login("supervisor", "PENGAWAS", "OSISSPENDAG")
            .unwrap();

        let record = shared.vote_as("student", "7a01", "24", "1", now()).unwrap();
        assert_eq!(record.voter_id, "7A01");
        assert!(shared.vote_as("teacher", "GURU9", "24", "99", now()).is_err());

        let session = shared.lock();
        assert_eq!(
            session.current_voter().map(|v| v.id.as_str()),
            Some("PENGAWAS")
        );
        assert_eq!(session.results().unwrap().total_votes, 1);
    }

    #[test]
    fn shared_vote_refuses_supervisor_credentials() {
        let shared = SharedSession::default();
        assert_eq!(
            shared.vote_as("supervisor", "PENGAWAS", "OSISSPENDAG", "1", now()),
            Err(VoteError::Session(SessionError::Forbidden(
                "supervisor".to_string()
            )))
        );
        assert!(shared.lock().votes().is_empty());
    }

    #[test]
    fn shared_session_reports_rejected_login() {
        let shared = SharedSession::default();
        assert_eq!(
            shared.vote_as("student", "7C07", "25", "1", now()),
            Err(VoteError::Rejected(Rejected))
        );
    }
}
