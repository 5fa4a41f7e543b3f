//! Structured parses of the username shapes, one per role.

use super::policy::CredentialPolicy;
use crate::model::voter::Role;

/// A class-based student login such as `8B15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId {
    pub grade: u8,
    pub section: char,
    pub number: u32,
}

impl StudentId {
    /// Exactly four ASCII characters: grade digit, section letter, two-digit
    /// student number. Each part must sit inside the policy's range.
    pub fn parse(username: &str, policy: &CredentialPolicy) -> Option<StudentId> {
        let bytes = username.as_bytes();
        if bytes.len() != 4 {
            return None;
        }

        let grade = digit(bytes[0])?;
        let section = bytes[1] as char;
        let number = digit(bytes[2])? as u32 * 10 + digit(bytes[3])? as u32;

        if !policy.grades.contains(&grade)
            || !section.is_ascii()
            || !policy.sections.contains(&section)
            || !policy.student_numbers.contains(&number)
        {
            return None;
        }

        Some(StudentId {
            grade,
            section,
            number,
        })
    }
}

/// A numbered teacher login such as `GURU07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeacherId {
    pub number: u32,
}

impl TeacherId {
    /// Prefix followed by one or more digits. Leading zeros are ignored, so
    /// `GURU1` and `GURU001` are the same teacher number.
    pub fn parse(username: &str, policy: &CredentialPolicy) -> Option<TeacherId> {
        let digits = username.strip_prefix(policy.teacher_prefix.as_str())?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Saturate instead of overflowing; anything that large is out of range anyway.
        let number = digits.bytes().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as u32)
        });

        if !policy.teacher_numbers.contains(&number) {
            return None;
        }

        Some(TeacherId { number })
    }
}

/// Infer the cohort a stored voter id belongs to from its shape alone.
///
/// Teachers are matched on the prefix only, so `GURU99` still counts as a
/// teacher vote even though it could never log in.
pub fn cohort_of(voter_id: &str, policy: &CredentialPolicy) -> Option<Role> {
    if StudentId::parse(voter_id, policy).is_some() {
        Some(Role::Student)
    } else if voter_id.starts_with(policy.teacher_prefix.as_str()) {
        Some(Role::Teacher)
    } else if voter_id == policy.supervisor_username {
        Some(Role::Supervisor)
    } else {
        None
    }
}

fn digit(b: u8) -> Option<u8> {
    if b.is_ascii_digit() {
        Some(b - b'0')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(s: &str) -> Option<StudentId> {
        StudentId::parse(s, &CredentialPolicy::default())
    }

    fn teacher(s: &str) -> Option<u32> {
        TeacherId::parse(s, &CredentialPolicy::default()).map(|t| t.number)
    }

    #[test]
    fn student_number_boundaries() {
        assert_eq!(
            student("7A01"),
            Some(StudentId {
                grade: 7,
                section: 'A',
                number: 1
            })
        );
        assert_eq!(student("9G34").map(|s| s.number), Some(34));
        assert_eq!(student("7A00"), None);
        assert_eq!(student("7A35"), None);
        assert_eq!(student("7A100"), None);
        assert_eq!(student("7A1"), None);
    }

    #[test]
    fn student_grade_and_section_ranges() {
        assert_eq!(student("6A01"), None);
        assert_eq!(student("0A01"), None);
        assert_eq!(student("7H01"), None);
        assert_eq!(student("7a01"), None);
        assert_eq!(student("8G15").map(|s| (s.grade, s.section)), Some((8, 'G')));
        assert_eq!(student("7É1"), None);
        assert_eq!(student(" 7A01"), None);
    }

    #[test]
    fn teacher_leading_zeros_are_insignificant() {
        assert_eq!(teacher("GURU1"), Some(1));
        assert_eq!(teacher("GURU01"), Some(1));
        assert_eq!(teacher("GURU075"), Some(75));
        assert_eq!(teacher("GURU0000000000000000000012"), Some(12));
    }

    #[test]
    fn teacher_out_of_range_or_malformed() {
        assert_eq!(teacher("GURU0"), None);
        assert_eq!(teacher("GURU76"), None);
        assert_eq!(teacher("GURU99999999999999999999"), None);
        assert_eq!(teacher("GURU"), None);
        assert_eq!(teacher("GURU1A"), None);
        assert_eq!(teacher("GURU-1"), None);
        assert_eq!(teacher("guru1"), None);
    }

    #[test]
    fn cohorts_follow_id_shape() {
        let policy = CredentialPolicy::default();
        assert_eq!(cohort_of("9G32", &policy), Some(Role::Student));
        assert_eq!(cohort_of("GURU075", &policy), Some(Role::Teacher));
        assert_eq!(cohort_of("GURU", &policy), Some(Role::Teacher));
        assert_eq!(cohort_of("PENGAWAS", &policy), Some(Role::Supervisor));
        assert_eq!(cohort_of("X", &policy), None);
        assert_eq!(cohort_of("", &policy), None);
        assert_eq!(cohort_of("7A35", &policy), None);
    }
}
