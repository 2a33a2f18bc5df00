mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{self, AppConfig, Config, SwaggerConfig};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::applications::{
    routes as applications_routes, ApplicationService, PgApplicationRepository,
};
use crate::features::jobs::{routes as jobs_routes, JobService, PgJobRepository};
use crate::modules::storage::DiskStorage;
use axum::{http::StatusCode, middleware::from_fn, routing::get, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = config::parse_worker_threads(std::env::var("TOKIO_WORKER_THREADS").ok())
        .map_err(|e| anyhow::anyhow!(e))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Assemble every route with Swagger UI, CORS, tracing and request ids
fn build_router(
    job_service: Arc<JobService>,
    application_service: Arc<ApplicationService>,
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger_config.title.clone(),
        version: swagger_config.version.clone(),
        description: swagger_config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = swagger_config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let public_routes = Router::new()
        .merge(jobs_routes::routes(job_service))
        .merge(applications_routes::routes(application_service));

    Router::new()
        .merge(swagger)
        .merge(public_routes)
        .route("/health", get(health_check))
        .layer(middleware::cors_layer(app_config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize local file store for attachments
    let storage = Arc::new(
        DiskStorage::new(config.storage.clone())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize upload storage: {}", e))?,
    );
    tracing::info!("Attachments stored under {}", storage.root().display());

    // Initialize Job Service
    let job_service = Arc::new(JobService::new(Arc::new(PgJobRepository::new(
        pool.clone(),
    ))));
    tracing::info!("Job service initialized");

    // Initialize Application Service
    let application_service = Arc::new(ApplicationService::new(
        Arc::new(PgApplicationRepository::new(pool.clone())),
        Arc::clone(&job_service),
        Arc::clone(&storage),
    ));
    tracing::info!("Application service initialized");

    let app = build_router(
        Arc::clone(&job_service),
        application_service,
        &config.app,
        &config.swagger,
    );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));

    // Seed placeholder jobs once the socket is bound; failure is not fatal
    match job_service.seed_sample_jobs().await {
        Ok(0) => {}
        Ok(count) => tracing::info!("Seeded {} sample jobs", count),
        Err(e) => tracing::error!("Failed to seed sample jobs: {}", e),
    }

    axum::serve(listener, app).await?;

    Ok(())
}
