//! Job postings feature.
//!
//! Jobs are read-only over HTTP; the only writer is the startup seed routine
//! in [`services::JobService::seed_sample_jobs`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/jobs` | No | List every job posting |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{JobRepository, PgJobRepository};
pub use services::JobService;
