use serde::{Deserialize, Serialize};
use std::fmt;

/// Audience the analysis is written for. Selects the instruction clause of the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Developer,
    Recruiter,
    Analyst,
    Student,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Developer, Role::Recruiter, Role::Analyst, Role::Student];

    /// Maps a caller-supplied tag onto a role.
    ///
    /// Total: anything that is not one of the four known tags, including a
    /// missing tag, resolves to [`Role::Developer`]. Matching is exact, so
    /// `"Recruiter"` also falls back.
    pub fn resolve(tag: Option<&str>) -> Self {
        match tag {
            Some("developer") => Role::Developer,
            Some("recruiter") => Role::Recruiter,
            Some("analyst") => Role::Analyst,
            Some("student") => Role::Student,
            _ => Role::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Recruiter => "recruiter",
            Role::Analyst => "analyst",
            Role::Student => "student",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Role::Developer => {
                "Extract technical insights, APIs, code patterns, and implementation details"
            }
            Role::Recruiter => "Extract skills, experience, qualifications, and candidate strengths",
            Role::Analyst => "Extract patterns, risks, trends, and data-driven insights",
            Role::Student => "Explain in simple terms with learning points",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
