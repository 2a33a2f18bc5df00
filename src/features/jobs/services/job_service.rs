use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::jobs::dtos::JobResponseDto;
use crate::features::jobs::models::{Job, NewJob};
use crate::features::jobs::repositories::JobRepository;

/// Placeholder postings inserted into an empty jobs table at startup
pub const SAMPLE_JOBS: &[NewJob] = &[
    NewJob {
        title: "Software Engineer",
        company: "Tech Corp",
        location: "Remote",
    },
    NewJob {
        title: "Product Manager",
        company: "Innovate Inc",
        location: "New York",
    },
];

/// Service for job posting operations
pub struct JobService {
    repository: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    /// List every job posting
    pub async fn list(&self) -> Result<Vec<JobResponseDto>> {
        let jobs = self.repository.list().await?;
        Ok(jobs.into_iter().map(|j| j.into()).collect())
    }

    /// Look up a job by its identifier
    pub async fn find(&self, id: Uuid) -> Result<Option<Job>> {
        self.repository.find_by_id(id).await
    }

    /// Insert [`SAMPLE_JOBS`] when no job exists yet; returns the number inserted
    pub async fn seed_sample_jobs(&self) -> Result<usize> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            tracing::debug!("Skipping job seed: {} jobs already present", existing);
            return Ok(0);
        }

        let inserted = self.repository.insert_many(SAMPLE_JOBS).await?;
        tracing::info!("Sample jobs seeded: {}", inserted.len());
        Ok(inserted.len())
    }
}
