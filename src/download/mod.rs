//! Download gate: secret-phrase verification and the CV artifact store.
//!
//! The secret comparison is constant-time to mitigate timing attacks.

use std::path::PathBuf;

use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::AppError;

/// Suggested filename sent in the Content-Disposition header.
pub const CV_FILENAME: &str = "Akmal_Suhaimi_CV.docx";

/// MIME type for Microsoft Word OOXML documents.
pub const CV_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Content-Disposition value for the download response.
pub const CV_DISPOSITION: &str = "attachment; filename=\"Akmal_Suhaimi_CV.docx\"";

/// CV bytes embedded at build time, so restrictive deployment targets need
/// no filesystem access at request time.
static EMBEDDED_CV: &[u8] = include_bytes!("../../assets/cv.docx");

/// Source of the fixed binary artifact released on a successful request.
#[derive(Debug)]
pub enum ArtifactStore {
    /// Build-time embedded copy (the default)
    Embedded(&'static [u8]),
    /// File on disk, read per request
    File(PathBuf),
}

impl ArtifactStore {
    pub fn from_config(config: &Config) -> Self {
        match &config.cv_path {
            Some(path) => ArtifactStore::File(path.clone()),
            None => ArtifactStore::Embedded(EMBEDDED_CV),
        }
    }

    /// Load the artifact bytes.
    ///
    /// The error message is fixed and user-safe; the path stays in the log.
    pub async fn load(&self) -> Result<Vec<u8>, AppError> {
        match self {
            ArtifactStore::Embedded(bytes) => Ok(bytes.to_vec()),
            ArtifactStore::File(path) => tokio::fs::read(path).await.map_err(|e| {
                tracing::error!("Failed to read CV artifact {:?}: {}", path, e);
                AppError::Internal("Failed to read CV file".to_string())
            }),
        }
    }
}

/// Perform constant-time secret phrase comparison.
///
/// Exact-case, exact-string: no trimming of incidental whitespace.
pub fn verify_password(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
