use serde::{Deserialize, Serialize};

/// Upper bound on `header.skills`. Shared by the prompt and the validator.
pub const MAX_SKILLS: usize = 10;

/// Structured resume record. Only produced through `resume::schema::validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub header: Header,
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub short_about: String,
    pub location: String,
    pub contacts: Contacts,
    pub skills: Vec<String>,
}

/// Contact details. Social fields hold bare handles, never URLs; empty means unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub link: String,
    pub location: String,
    /// Employment type, e.g. "Full-time".
    pub contract: String,
    pub title: String,
    /// YYYY-MM-DD
    pub start: String,
    /// YYYY-MM-DD, `None` while the role is ongoing.
    pub end: Option<String>,
    pub description: String,
}

impl WorkExperience {
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    /// Year, e.g. "2015".
    pub start: String,
    pub end: String,
}
