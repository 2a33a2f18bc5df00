use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::applications::dtos::MAX_REQUEST_BODY_SIZE;
use crate::features::applications::handlers;
use crate::features::applications::services::ApplicationService;

/// Create routes for the applications feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route(
            "/api/apply",
            // Allow every file field at its max count plus multipart overhead
            post(handlers::submit_application).layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
        )
        .with_state(service)
}
