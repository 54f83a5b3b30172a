//! Axum route handlers for the Requirements API.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::requirements::{extract_requirements, RequirementRecord};

#[derive(Debug, Deserialize)]
pub struct ExtractRequirementsRequest {
    pub job_description: String,
}

/// POST /api/v1/requirements
///
/// Extracts title, skills, location, education signal and keywords from a
/// job description. Useful for previewing what candidates are scored against.
pub async fn handle_extract_requirements(
    Json(request): Json<ExtractRequirementsRequest>,
) -> Result<Json<RequirementRecord>, AppError> {
    require_job_description(&request.job_description)?;
    Ok(Json(extract_requirements(&request.job_description)))
}

pub fn require_job_description(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}
