//! Job application intake feature.
//!
//! Accepts a multipart submission, runs it through the upload gate, checks
//! the referenced job, stores the attachments on disk and records the
//! application.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/apply` | No | Submit an application (multipart/form-data) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{ApplicationRepository, PgApplicationRepository};
pub use services::ApplicationService;
