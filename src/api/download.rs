//! CV download endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::download::{self, CV_CONTENT_TYPE, CV_DISPOSITION};
use crate::errors::AppError;
use crate::AppState;

/// Request body for the download endpoint.
#[derive(Debug, Deserialize)]
pub struct DownloadCvRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /api/download-cv - Release the CV after secret-phrase verification.
///
/// Validation order is fixed: presence first, then the secret comparison.
/// A body that fails to parse is treated the same as an absent password.
pub async fn download_cv(
    State(state): State<AppState>,
    payload: Result<Json<DownloadCvRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let password = payload
        .ok()
        .and_then(|Json(request)| request.password)
        .unwrap_or_default();

    if password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    if !download::verify_password(&password, &state.config.download_password) {
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    let bytes = state.artifact.load().await?;

    let headers = [
        (header::CONTENT_TYPE, CV_CONTENT_TYPE),
        (header::CONTENT_DISPOSITION, CV_DISPOSITION),
    ];
    Ok((headers, bytes).into_response())
}
