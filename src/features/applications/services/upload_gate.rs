//! Upload gate for application submissions
//!
//! Reads the whole multipart stream, accepting or rejecting each file part
//! by field, count, MIME type and size. Accepted files are staged in memory;
//! nothing touches the disk until the submission has passed validation, so a
//! rejected request leaves no files behind.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::applications::dtos::{
    is_mime_type_allowed, normalize_content_type, ApplicantDto, AttachmentKind,
    FILE_TOO_LARGE_MESSAGE, INVALID_FILE_TYPE_MESSAGE, MAX_FILE_SIZE, UNEXPECTED_FIELD_MESSAGE,
};

/// A file that passed the gate but is not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub kind: AttachmentKind,
    pub original_filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Everything the gate accepted from one multipart request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub job_id: Option<String>,
    /// Accepted files in arrival order
    pub files: Vec<StagedFile>,
}

impl ApplicationSubmission {
    pub fn file_count(&self, kind: AttachmentKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }

    pub fn applicant(&self) -> ApplicantDto {
        ApplicantDto {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            job_id: self.job_id.clone().unwrap_or_default(),
        }
    }
}

/// Decide whether one more file of `kind` with `content_type` may enter
pub fn check_file(kind: AttachmentKind, content_type: &str, already_accepted: usize) -> Result<()> {
    if already_accepted >= kind.max_count() {
        debug!("Too many files for field: {}", kind.field_name());
        return Err(AppError::Upload(UNEXPECTED_FIELD_MESSAGE.to_string()));
    }

    if !is_mime_type_allowed(content_type) {
        return Err(AppError::Upload(INVALID_FILE_TYPE_MESSAGE.to_string()));
    }

    Ok(())
}

/// Drain the multipart stream into an [`ApplicationSubmission`]
///
/// The first rejected part aborts the whole request.
pub async fn read_submission(multipart: &mut Multipart) -> Result<ApplicationSubmission> {
    let mut submission = ApplicationSubmission::default();

    while let Some(mut field) = multipart.next_field().await.map_err(upload_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        if let Some(file_name) = field.file_name().map(str::to_string) {
            // Browsers send an empty filename for a file input left blank
            if file_name.is_empty() {
                debug!("Skipping empty file input: {}", field_name);
                continue;
            }

            let kind = AttachmentKind::from_field_name(&field_name).ok_or_else(|| {
                debug!("File under unknown field: {}", field_name);
                AppError::Upload(UNEXPECTED_FIELD_MESSAGE.to_string())
            })?;
            let content_type = normalize_content_type(field.content_type());
            check_file(kind, &content_type, submission.file_count(kind))?;

            let data = read_limited(&mut field, MAX_FILE_SIZE).await?;
            debug!(
                "Accepted {} file '{}' ({}, {} bytes)",
                kind.field_name(),
                file_name,
                content_type,
                data.len()
            );

            submission.files.push(StagedFile {
                kind,
                original_filename: file_name,
                content_type,
                data,
            });
            continue;
        }

        match field_name.as_str() {
            "name" => submission.name = Some(field.text().await.map_err(upload_error)?),
            "email" => submission.email = Some(field.text().await.map_err(upload_error)?),
            "jobId" => submission.job_id = Some(field.text().await.map_err(upload_error)?),
            _ => debug!("Ignoring unknown field: {}", field_name),
        }
    }

    Ok(submission)
}

/// Read a file part chunk by chunk, failing as soon as it exceeds `limit`
async fn read_limited(field: &mut Field<'_>, limit: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();

    while let Some(chunk) = field.chunk().await.map_err(upload_error)? {
        if data.len() + chunk.len() > limit {
            return Err(AppError::Upload(FILE_TOO_LARGE_MESSAGE.to_string()));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}

fn upload_error(e: MultipartError) -> AppError {
    debug!("Failed to read multipart data: {}", e);
    AppError::Upload(e.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(kind: AttachmentKind) -> StagedFile {
        StagedFile {
            kind,
            original_filename: "f.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_check_file_accepts_allowed_type_under_limit() {
        assert!(check_file(AttachmentKind::Resume, "application/pdf", 0).is_ok());
        assert!(check_file(AttachmentKind::Portfolio, "image/png", 4).is_ok());
    }

    #[test]
    fn test_check_file_rejects_disallowed_type() {
        let err = check_file(AttachmentKind::Resume, "text/plain", 0).unwrap_err();
        assert!(matches!(err, AppError::Upload(msg) if msg == INVALID_FILE_TYPE_MESSAGE));
    }

    #[test]
    fn test_check_file_enforces_field_counts() {
        assert!(check_file(AttachmentKind::Resume, "application/pdf", 3).is_err());
        assert!(check_file(AttachmentKind::CoverLetter, "application/pdf", 3).is_err());
        let err = check_file(AttachmentKind::Portfolio, "image/jpeg", 5).unwrap_err();
        assert!(matches!(err, AppError::Upload(msg) if msg == UNEXPECTED_FIELD_MESSAGE));
    }

    #[test]
    fn test_count_is_checked_before_type() {
        let err = check_file(AttachmentKind::Resume, "text/plain", 3).unwrap_err();
        assert!(matches!(err, AppError::Upload(msg) if msg == UNEXPECTED_FIELD_MESSAGE));
    }

    #[test]
    fn test_submission_counts_files_per_field() {
        let submission = ApplicationSubmission {
            files: vec![
                staged(AttachmentKind::Resume),
                staged(AttachmentKind::Portfolio),
                staged(AttachmentKind::Resume),
            ],
            ..Default::default()
        };

        assert_eq!(submission.file_count(AttachmentKind::Resume), 2);
        assert_eq!(submission.file_count(AttachmentKind::CoverLetter), 0);
        assert_eq!(submission.file_count(AttachmentKind::Portfolio), 1);
    }

    #[test]
    fn test_applicant_defaults_missing_fields_to_empty() {
        let submission = ApplicationSubmission {
            name: Some("Jane".to_string()),
            ..Default::default()
        };

        let applicant = submission.applicant();
        assert_eq!(applicant.name, "Jane");
        assert!(applicant.email.is_empty());
        assert!(applicant.job_id.is_empty());
    }
}
