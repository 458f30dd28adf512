//! Education entry model.

use serde::{Deserialize, Serialize};

/// Completion status of an education entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EducationStatus {
    Ongoing,
    Completed,
    Planned,
}

impl EducationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationStatus::Ongoing => "ongoing",
            EducationStatus::Completed => "completed",
            EducationStatus::Planned => "planned",
        }
    }
}

/// A single education entry, ordered most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EducationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_completion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
