use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of account a voter logged in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Supervisor,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Supervisor => "supervisor",
        }
    }

    /// Label shown to voters on the login screen.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Siswa",
            Role::Teacher => "Guru",
            Role::Supervisor => "Pengawas",
        }
    }

    pub fn credential_hint(&self) -> &'static str {
        match self {
            Role::Student => "Username: 7A01-7A34, 8A01-8G32, 9A01-9G32, Password: 24",
            Role::Teacher => "Username: GURU01-GURU75, Password: 24",
            Role::Supervisor => "Silakan hubungi administrator untuk kredensial login",
        }
    }

    /// Supervisors watch the results, everyone else casts a ballot.
    pub fn can_vote(&self) -> bool {
        !matches!(self, Role::Supervisor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "supervisor" => Ok(Role::Supervisor),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub id: String,
    pub role: Role,
    pub has_voted: bool,
}

impl Voter {
    pub fn new(id: String, role: Role) -> Voter {
        Voter {
            id,
            role,
            has_voted: false,
        }
    }

    /// Flip `has_voted`. Once set it never goes back.
    pub fn mark_voted(&mut self) {
        self.has_voted = true;
    }
}
