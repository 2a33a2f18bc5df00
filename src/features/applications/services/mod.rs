mod application_service;
pub mod upload_gate;

pub use application_service::ApplicationService;
pub use upload_gate::{ApplicationSubmission, StagedFile};
