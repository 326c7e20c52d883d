#![allow(dead_code)]

//! Typed view of what the profile store hands out per username.
//! Folio never persists these; it only produces the `ResumeData` they carry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    #[default]
    Draft,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub status: ResumeStatus,
    pub resume_data: Option<ResumeData>,
}

impl ResumeRecord {
    /// A freshly synthesized resume starts as a draft the user reviews before publishing.
    pub fn draft(resume_data: ResumeData) -> Self {
        Self {
            status: ResumeStatus::Draft,
            resume_data: Some(resume_data),
        }
    }

    /// The payload a public page may show: present only once the record is live.
    pub fn live_resume(&self) -> Option<&ResumeData> {
        match self.status {
            ResumeStatus::Live => self.resume_data.as_ref(),
            ResumeStatus::Draft => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub resume: ResumeRecord,
    pub profile_image: Option<String>,
}
