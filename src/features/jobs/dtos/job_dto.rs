use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Response DTO for a job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobResponseDto {
    /// Identifier to submit as `jobId` when applying
    pub id: Uuid,
    #[schema(example = "Software Engineer")]
    pub title: String,
    #[schema(example = "Tech Corp")]
    pub company: String,
    #[schema(example = "Remote")]
    pub location: String,
    pub created_at: DateTime<Utc>,
}
