//! Project model, including the optional in-depth case study.

use serde::{Deserialize, Serialize};

/// High-level classification for a project card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectType {
    Integration,
    Platform,
    System,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Integration => "Integration",
            ProjectType::Platform => "Platform",
            ProjectType::System => "System",
        }
    }
}

/// Highlighted code fragment inside a case study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub language: String,
    pub code: String,
}

/// Optional problem/approach/solution narrative for a featured project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCaseStudy {
    pub problem: String,
    pub approach: String,
    pub solution: String,
    pub results: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<CodeSnippet>,
}

/// A single project entry, ordered most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub year: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study: Option<ProjectCaseStudy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}
