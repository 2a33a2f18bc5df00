use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::jobs::dtos::JobResponseDto;
use crate::features::jobs::services::JobService;
use crate::shared::types::ErrorResponse;

/// List all job postings
///
/// Returns every job in storage order, without filtering or pagination.
#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "List of jobs", body = Vec<JobResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "jobs"
)]
pub async fn list_jobs(
    State(service): State<Arc<JobService>>,
) -> Result<Json<Vec<JobResponseDto>>> {
    let jobs = service.list().await?;
    Ok(Json(jobs))
}
