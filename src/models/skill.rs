//! Skill category model.

use serde::{Deserialize, Serialize};

/// A named group of skills, rendered as one badge cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}
