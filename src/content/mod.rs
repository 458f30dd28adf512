//! Static résumé content.
//!
//! The record is embedded at build time and parsed exactly once; everything
//! downstream borrows it. A malformed fixture is a build artifact defect, so
//! parsing panics at first access rather than threading a Result through
//! every read of immutable data.

use once_cell::sync::Lazy;

use crate::models::Resume;

static RESUME_JSON: &str = include_str!("resume.json");

static RESUME: Lazy<Resume> =
    Lazy::new(|| serde_json::from_str(RESUME_JSON).expect("embedded resume.json is malformed"));

/// Borrow the résumé content model.
pub fn resume() -> &'static Resume {
    &RESUME
}
