use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::applications::dtos::AttachmentKind;

/// Database model for a submitted application
#[derive(Debug, Clone, PartialEq, FromRow)]
#[allow(dead_code)]
pub struct Application {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub resumes: Vec<String>,
    pub cover_letters: Vec<String>,
    pub portfolios: Vec<String>,
    /// Soft reference to `jobs.id`, checked at submission time only
    pub job_id: Uuid,
    pub applied_at: DateTime<Utc>,
}

/// Insert payload for an application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub resumes: Vec<String>,
    pub cover_letters: Vec<String>,
    pub portfolios: Vec<String>,
    pub job_id: Uuid,
}

impl NewApplication {
    /// Group stored filenames by the field they were uploaded under, keeping upload order
    pub fn new(name: String, email: String, job_id: Uuid, stored: &[(AttachmentKind, String)]) -> Self {
        let names_for = |kind: AttachmentKind| -> Vec<String> {
            stored
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, name)| name.clone())
                .collect()
        };

        Self {
            resumes: names_for(AttachmentKind::Resume),
            cover_letters: names_for(AttachmentKind::CoverLetter),
            portfolios: names_for(AttachmentKind::Portfolio),
            name,
            email,
            job_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_groups_files_by_field_in_order() {
        let stored = vec![
            (AttachmentKind::Portfolio, "3-site.png".to_string()),
            (AttachmentKind::Resume, "1-cv.pdf".to_string()),
            (AttachmentKind::Resume, "2-cv-long.pdf".to_string()),
            (AttachmentKind::Portfolio, "4-logo.jpg".to_string()),
        ];

        let application = NewApplication::new(
            "Jane".to_string(),
            "jane@x.com".to_string(),
            Uuid::nil(),
            &stored,
        );

        assert_eq!(application.resumes, vec!["1-cv.pdf", "2-cv-long.pdf"]);
        assert!(application.cover_letters.is_empty());
        assert_eq!(application.portfolios, vec!["3-site.png", "4-logo.jpg"]);
    }
}
