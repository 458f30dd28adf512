//! Root résumé record matching the frontend Resume interface.

use serde::{Deserialize, Serialize};

use super::{
    AboutMe, Certification, ContactInfo, Education, Experience, Project, SkillCategory, Stat,
    TerminalSnippet, Testimonial,
};

/// The full résumé content model.
///
/// Built once at load time and never mutated; handlers borrow it from the
/// content module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub contact: ContactInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<AboutMe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_snippet: Option<TerminalSnippet>,
}
