use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppMultipart;
use crate::features::applications::dtos::{SubmitApplicationDto, SUBMITTED_MESSAGE};
use crate::features::applications::services::{upload_gate, ApplicationService};
use crate::shared::types::{ErrorResponse, MessageResponse};

/// Submit a job application
///
/// Accepts multipart/form-data with:
/// - `name`, `email`, `jobId`: required text fields
/// - `resume`: 1-3 files
/// - `coverLetter`: 0-3 files
/// - `portfolio`: 0-5 files
///
/// Files must be PDF, DOC, DOCX, JPEG or PNG and at most 5 MB each.
#[utoipa::path(
    post,
    path = "/api/apply",
    tag = "applications",
    request_body(
        content = SubmitApplicationDto,
        content_type = "multipart/form-data",
        description = "Applicant details with resume, cover letter and portfolio files",
    ),
    responses(
        (status = 200, description = "Application submitted", body = MessageResponse),
        (status = 400, description = "Missing required fields or resume", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
        (status = 500, description = "Upload rejected or unexpected failure", body = ErrorResponse)
    )
)]
pub async fn submit_application(
    State(service): State<Arc<ApplicationService>>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<MessageResponse>> {
    let submission = upload_gate::read_submission(&mut multipart).await?;
    service.submit(submission).await?;

    Ok(Json(MessageResponse::new(SUBMITTED_MESSAGE)))
}
