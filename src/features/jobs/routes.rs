use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::jobs::handlers;
use crate::features::jobs::services::JobService;

/// Create routes for the jobs feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<JobService>) -> Router {
    Router::new()
        .route("/api/jobs", get(handlers::list_jobs))
        .with_state(service)
}
