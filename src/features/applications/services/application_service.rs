use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::applications::dtos::{
    AttachmentKind, JOB_NOT_FOUND_MESSAGE, REQUIRED_FIELDS_MESSAGE, RESUME_REQUIRED_MESSAGE,
};
use crate::features::applications::models::{Application, NewApplication};
use crate::features::applications::repositories::ApplicationRepository;
use crate::features::applications::services::{ApplicationSubmission, StagedFile};
use crate::features::jobs::JobService;
use crate::modules::storage::DiskStorage;

/// Service for application submissions
pub struct ApplicationService {
    repository: Arc<dyn ApplicationRepository>,
    job_service: Arc<JobService>,
    storage: Arc<DiskStorage>,
}

impl ApplicationService {
    pub fn new(
        repository: Arc<dyn ApplicationRepository>,
        job_service: Arc<JobService>,
        storage: Arc<DiskStorage>,
    ) -> Self {
        Self {
            repository,
            job_service,
            storage,
        }
    }

    /// Validate a gated submission, store its files and record the application
    ///
    /// Checks run in order and the first failure wins: required text fields,
    /// at least one resume, then the referenced job. Files are written only
    /// after every check passes and are removed again if the insert fails.
    pub async fn submit(&self, submission: ApplicationSubmission) -> Result<Application> {
        let applicant = submission.applicant();
        applicant
            .validate()
            .map_err(|_| AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        if submission.file_count(AttachmentKind::Resume) == 0 {
            return Err(AppError::Validation(RESUME_REQUIRED_MESSAGE.to_string()));
        }

        let job_id = self.resolve_job(&applicant.job_id).await?;

        let stored = self.store_files(&submission.files).await?;
        let new_application = NewApplication::new(applicant.name, applicant.email, job_id, &stored);

        match self.repository.insert(new_application).await {
            Ok(application) => {
                info!(
                    "Application created: id={}, job_id={}, resumes={}, cover_letters={}, portfolios={}",
                    application.id,
                    application.job_id,
                    application.resumes.len(),
                    application.cover_letters.len(),
                    application.portfolios.len()
                );
                Ok(application)
            }
            Err(e) => {
                self.discard(stored.iter().map(|(_, name)| name.as_str()))
                    .await;
                Err(e)
            }
        }
    }

    /// Map the raw `jobId` field to an existing job's identifier
    async fn resolve_job(&self, raw_job_id: &str) -> Result<Uuid> {
        let not_found = || AppError::NotFound(JOB_NOT_FOUND_MESSAGE.to_string());

        let job_id = Uuid::parse_str(raw_job_id).map_err(|_| not_found())?;
        match self.job_service.find(job_id).await? {
            Some(job) => Ok(job.id),
            None => Err(not_found()),
        }
    }

    /// Write every staged file, rolling back on the first failure
    async fn store_files(&self, files: &[StagedFile]) -> Result<Vec<(AttachmentKind, String)>> {
        let mut stored: Vec<(AttachmentKind, String)> = Vec::with_capacity(files.len());

        for file in files {
            tracing::debug!(
                "Storing {} '{}' ({})",
                file.kind.field_name(),
                file.original_filename,
                file.content_type
            );
            match self.storage.store(&file.original_filename, &file.data).await {
                Ok(name) => stored.push((file.kind, name)),
                Err(e) => {
                    self.discard(stored.iter().map(|(_, name)| name.as_str()))
                        .await;
                    return Err(e);
                }
            }
        }

        Ok(stored)
    }

    /// Best-effort removal of stored files
    async fn discard<'a>(&self, names: impl Iterator<Item = &'a str>) {
        for name in names {
            if let Err(e) = self.storage.remove(name).await {
                warn!("Failed to clean up {}: {}", name, e);
            }
        }
    }
}
