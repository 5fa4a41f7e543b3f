use std::ops::RangeInclusive;

/// The fixed identity scheme of one election.
///
/// `Default` is the OSIS chair election scheme: class-based student logins,
/// numbered teacher logins and a single supervisor account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub grades: RangeInclusive<u8>,
    pub sections: RangeInclusive<char>,
    pub student_numbers: RangeInclusive<u32>,
    pub student_password: String,
    pub teacher_prefix: String,
    pub teacher_numbers: RangeInclusive<u32>,
    pub teacher_password: String,
    pub supervisor_username: String,
    pub supervisor_password: String,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            grades: 7..=9,
            sections: 'A'..='G',
            student_numbers: 1..=34,
            student_password: "24".to_string(),
            teacher_prefix: "GURU".to_string(),
            teacher_numbers: 1..=75,
            teacher_password: "24".to_string(),
            supervisor_username: "PENGAWAS".to_string(),
            supervisor_password: "OSISSPENDAG".to_string(),
        }
    }
}
