//! Credential validation for the fixed identity scheme.
//!
//! Every failure, whatever its cause, comes back as the same [`Rejected`]
//! value so a caller can never tell which field was wrong.

pub mod policy;
pub mod shape;

pub use policy::CredentialPolicy;
pub use shape::{cohort_of, StudentId, TeacherId};

use crate::model::voter::{Role, Voter};
use tracing::debug;

/// Why a credential triple failed. Only ever logged, never returned.
#[derive(Debug, thiserror::Error)]
enum CredentialError {
    #[error("username does not match the role's pattern")]
    InvalidCredentialShape,
    #[error("password mismatch")]
    PasswordMismatch,
    #[error("unknown role")]
    UnknownRole,
    #[error("empty username or password")]
    EmptyField,
}

/// Generic credential mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Username atau password salah")]
pub struct Rejected;

/// Validate a login against the default policy.
///
/// `username` must already be uppercased; matching is case-sensitive.
pub fn validate(role: &str, username: &str, password: &str) -> Result<Voter, Rejected> {
    validate_with(&CredentialPolicy::default(), role, username, password)
}

pub fn validate_with(
    policy: &CredentialPolicy,
    role: &str,
    username: &str,
    password: &str,
) -> Result<Voter, Rejected> {
    check(policy, role, username, password).map_err(|e| {
        debug!(role, error = %e, "credential rejected");
        Rejected
    })
}

fn check(
    policy: &CredentialPolicy,
    role: &str,
    username: &str,
    password: &str,
) -> Result<Voter, CredentialError> {
    if username.is_empty() || password.is_empty() {
        return Err(CredentialError::EmptyField);
    }

    let role: Role = role.parse().map_err(|_| CredentialError::UnknownRole)?;

    match role {
        Role::Student => {
            StudentId::parse(username, policy).ok_or(CredentialError::InvalidCredentialShape)?;
            expect_password(password, &policy.student_password)?;
        }
        Role::Teacher => {
            TeacherId::parse(username, policy).ok_or(CredentialError::InvalidCredentialShape)?;
            expect_password(password, &policy.teacher_password)?;
        }
        Role::Supervisor => {
            if username != policy.supervisor_username {
                return Err(CredentialError::InvalidCredentialShape);
            }
            expect_password(password, &policy.supervisor_password)?;
        }
    }

    Ok(Voter::new(username.to_string(), role))
}

fn expect_password(given: &str, expected: &str) -> Result<(), CredentialError> {
    if given == expected {
        Ok(())
    } else {
        Err(CredentialError::PasswordMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_student_becomes_fresh_voter() {
        let voter = validate("student", "7A01", "24").unwrap();
        assert_eq!(voter, Voter::new("7A01".to_string(), Role::Student));
        assert!(!voter.has_voted);
    }

    #[test]
    fn student_password_must_match() {
        assert_eq!(validate("student", "7A01", "25"), Err(Rejected));
        assert_eq!(validate("student", "7A01", "OSISSPENDAG"), Err(Rejected));
    }

    #[test]
    fn rejections_are_indistinguishable() {
        let bad_shape = validate("student", "7H01", "24");
        let bad_password = validate("student", "7A01", "00");
        let bad_role = validate("principal", "7A01", "24");
        let empty = validate("student", "", "24");
        assert_eq!(bad_shape, bad_password);
        assert_eq!(bad_password, bad_role);
        assert_eq!(bad_role, empty);
        assert_eq!(Rejected.to_string(), "Username atau password salah");
    }

    #[test]
    fn teacher_numbers() {
        assert!(validate("teacher", "GURU1", "24").is_ok());
        assert!(validate("teacher", "GURU075", "24").is_ok());
        assert!(validate("teacher", "GURU76", "24").is_err());
        assert!(validate("teacher", "GURU0", "24").is_err());
        assert!(validate("teacher", "GURU10", "25").is_err());
    }

    #[test]
    fn role_must_match_username_kind() {
        assert!(validate("teacher", "7A01", "24").is_err());
        assert!(validate("student", "GURU1", "24").is_err());
        assert!(validate("supervisor", "GURU1", "24").is_err());
    }

    #[test]
    fn supervisor_is_exact_and_case_sensitive() {
        let voter = validate("supervisor", "PENGAWAS", "OSISSPENDAG").unwrap();
        assert_eq!(voter.role, Role::Supervisor);
        assert!(validate("supervisor", "pengawas", "OSISSPENDAG").is_err());
        assert!(validate("supervisor", "Pengawas", "OSISSPENDAG").is_err());
        assert!(validate("supervisor", "PENGAWAS", "osisspendag").is_err());
        assert!(validate("supervisor", "PENGAWAS", "").is_err());
    }

    #[test]
    fn custom_policy_changes_constants() {
        let policy = CredentialPolicy {
            student_password: "rahasia".to_string(),
            teacher_numbers: 1..=10,
            ..CredentialPolicy::default()
        };
        assert!(validate_with(&policy, "student", "7A01", "rahasia").is_ok());
        assert!(validate_with(&policy, "student", "7A01", "24").is_err());
        assert!(validate_with(&policy, "teacher", "GURU11", "24").is_err());
    }
}
