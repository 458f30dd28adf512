//! Contact information matching the frontend ContactInfo interface.

use serde::{Deserialize, Serialize};

/// Contact channels and identity for the résumé owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub website: String,
    pub image: String,
    pub github: String,
    pub whatsapp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendly: Option<String>,
}
