use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::applications::models::{Application, NewApplication};

/// Persistence boundary for applications
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn insert(&self, application: NewApplication) -> Result<Application>;
}

/// PostgreSQL-backed application repository
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn insert(&self, application: NewApplication) -> Result<Application> {
        sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (name, email, resumes, cover_letters, portfolios, job_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, resumes, cover_letters, portfolios, job_id, applied_at
            "#,
        )
        .bind(application.name)
        .bind(application.email)
        .bind(application.resumes)
        .bind(application.cover_letters)
        .bind(application.portfolios)
        .bind(application.job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create application: {:?}", e);
            AppError::Database(e)
        })
    }
}
