use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::jobs::dtos::JobResponseDto;

/// Database model for a job posting
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

impl From<Job> for JobResponseDto {
    fn from(j: Job) -> Self {
        Self {
            id: j.id,
            title: j.title,
            company: j.company,
            location: j.location,
            created_at: j.created_at,
        }
    }
}
