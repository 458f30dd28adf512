//! Résumé content endpoint.

use crate::content;
use crate::models::Resume;

use super::{success, ApiResult};

/// GET /api/resume - Get the full résumé record.
pub async fn get_resume() -> ApiResult<&'static Resume> {
    success(content::resume())
}
