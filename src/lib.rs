//! Credential checks, one-vote-per-voter sessions and result tallies for the
//! OSIS chair election.
//!
//! The two pure pieces are [`identity::validate`], which decides who may log
//! in, and [`reports::tabulation::tally`], which turns the vote list into
//! ranked results, cohort counts and hourly buckets. [`session::Session`]
//! ties them together around a caller-owned vote list.

pub mod config;
pub mod identity;
pub mod model;
pub mod reports;
pub mod session;
pub mod util;

pub use identity::{validate, Rejected};
pub use model::election::{Candidate, Roster, VoteRecord};
pub use model::voter::{Role, Voter};
pub use reports::tabulation::{tally, Tally};
pub use session::{Session, SessionError, SharedSession};
