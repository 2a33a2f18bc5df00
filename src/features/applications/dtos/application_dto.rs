use utoipa::ToSchema;
use validator::Validate;

pub const SUBMITTED_MESSAGE: &str = "Application submitted successfully!";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and job ID are required";
pub const RESUME_REQUIRED_MESSAGE: &str = "At least one resume is required";
pub const JOB_NOT_FOUND_MESSAGE: &str = "Job not found";

/// Submit application request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads the multipart stream through the upload gate.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
#[schema(rename_all = "camelCase")]
pub struct SubmitApplicationDto {
    /// Applicant full name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Applicant email
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Identifier of the job being applied for
    pub job_id: String,
    /// One to three resume files (PDF/DOC/DOCX/JPEG/PNG, max 5 MB each)
    #[schema(value_type = Vec<String>, format = Binary)]
    pub resume: Vec<Vec<u8>>,
    /// Up to three cover letter files
    #[schema(value_type = Option<Vec<String>>, format = Binary)]
    pub cover_letter: Option<Vec<Vec<u8>>>,
    /// Up to five portfolio files
    #[schema(value_type = Option<Vec<String>>, format = Binary)]
    pub portfolio: Option<Vec<Vec<u8>>>,
}

/// Applicant text fields; a missing field is carried as an empty string
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ApplicantDto {
    #[validate(length(min = 1, message = "Name, email, and job ID are required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Name, email, and job ID are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Name, email, and job ID are required"))]
    pub job_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(name: &str, email: &str, job_id: &str) -> ApplicantDto {
        ApplicantDto {
            name: name.to_string(),
            email: email.to_string(),
            job_id: job_id.to_string(),
        }
    }

    #[test]
    fn test_complete_applicant_is_valid() {
        assert!(applicant("Jane Doe", "jane@x.com", "abc").validate().is_ok());
    }

    #[test]
    fn test_any_empty_field_is_invalid() {
        assert!(applicant("", "jane@x.com", "abc").validate().is_err());
        assert!(applicant("Jane", "", "abc").validate().is_err());
        assert!(applicant("Jane", "jane@x.com", "").validate().is_err());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(applicant(" ", " ", " ").validate().is_ok());
    }
}
