//! In-memory repositories for router and service tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::applications::models::{Application, NewApplication};
use crate::features::applications::ApplicationRepository;
use crate::features::jobs::models::{Job, NewJob};
use crate::features::jobs::JobRepository;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
    fail: bool,
}

impl InMemoryJobRepository {
    /// Repository pre-filled with one job per title, oldest first
    pub fn with_titles(titles: &[&str]) -> Self {
        let base = Utc::now() - Duration::minutes(titles.len() as i64);
        let jobs = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Job {
                id: Uuid::new_v4(),
                title: title.to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                created_at: base + Duration::minutes(i as i64),
            })
            .collect();

        Self {
            jobs: Mutex::new(jobs),
            fail: false,
        }
    }

    /// Repository whose every call fails like an unreachable database
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self) -> Result<Vec<Job>> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.jobs())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.jobs().into_iter().find(|j| j.id == id))
    }

    async fn count(&self) -> Result<i64> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.jobs.lock().unwrap().len() as i64)
    }

    async fn insert_many(&self, jobs: &[NewJob]) -> Result<Vec<Job>> {
        if self.fail {
            return Err(unavailable());
        }
        let inserted: Vec<Job> = jobs
            .iter()
            .map(|j| Job {
                id: Uuid::new_v4(),
                title: j.title.to_string(),
                company: j.company.to_string(),
                location: j.location.to_string(),
                created_at: Utc::now(),
            })
            .collect();
        self.jobs.lock().unwrap().extend(inserted.iter().cloned());
        Ok(inserted)
    }
}

#[derive(Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<Vec<Application>>,
    fail: bool,
}

impl InMemoryApplicationRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn applications(&self) -> Vec<Application> {
        self.applications.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn insert(&self, application: NewApplication) -> Result<Application> {
        if self.fail {
            return Err(unavailable());
        }
        let stored = Application {
            id: Uuid::new_v4(),
            name: application.name,
            email: application.email,
            resumes: application.resumes,
            cover_letters: application.cover_letters,
            portfolios: application.portfolios,
            job_id: application.job_id,
            applied_at: Utc::now(),
        };
        self.applications.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}
