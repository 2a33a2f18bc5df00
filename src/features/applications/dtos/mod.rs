mod application_dto;
mod upload_dto;

pub use application_dto::*;
pub use upload_dto::*;
