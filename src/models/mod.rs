//! Data models for the portfolio résumé content.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod brand;
mod certification;
mod contact;
mod education;
mod experience;
mod project;
mod resume;
mod skill;

pub use brand::*;
pub use certification::*;
pub use contact::*;
pub use education::*;
pub use experience::*;
pub use project::*;
pub use resume::*;
pub use skill::*;
