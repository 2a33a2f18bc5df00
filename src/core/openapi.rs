use utoipa::{Modify, OpenApi};

use crate::features::applications::{dtos as applications_dtos, handlers as applications_handlers};
use crate::features::jobs::{dtos as jobs_dtos, handlers as jobs_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Jobs
        jobs_handlers::list_jobs,
        // Applications
        applications_handlers::submit_application,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            // Jobs
            jobs_dtos::JobResponseDto,
            // Applications
            applications_dtos::SubmitApplicationDto,
        )
    ),
    tags(
        (name = "jobs", description = "Job postings (public)"),
        (name = "applications", description = "Job application intake (public)"),
    ),
    info(
        title = "Job Intake API",
        version = "0.1.0",
        description = "Job listings and application intake",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
