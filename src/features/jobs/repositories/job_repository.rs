use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::jobs::models::{Job, NewJob};

/// Persistence boundary for job postings
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Every job, oldest first
    async fn list(&self) -> Result<Vec<Job>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>>;

    async fn count(&self) -> Result<i64>;

    /// Insert all jobs atomically, returning the stored rows in input order
    async fn insert_many(&self, jobs: &[NewJob]) -> Result<Vec<Job>>;
}

/// PostgreSQL-backed job repository
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn list(&self) -> Result<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, company, location, created_at
            FROM jobs
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list jobs: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, company, location, created_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get job by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count jobs: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert_many(&self, jobs: &[NewJob]) -> Result<Vec<Job>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(jobs.len());

        for job in jobs {
            let row = sqlx::query_as::<_, Job>(
                r#"
                INSERT INTO jobs (title, company, location)
                VALUES ($1, $2, $3)
                RETURNING id, title, company, location, created_at
                "#,
            )
            .bind(job.title)
            .bind(job.company)
            .bind(job.location)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert job '{}': {:?}", job.title, e);
                AppError::Database(e)
            })?;
            inserted.push(row);
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
