/// Allowed MIME types for application attachments
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

/// Maximum size of a single attachment in bytes (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Request body ceiling: every field at its max count plus multipart overhead
pub const MAX_REQUEST_BODY_SIZE: usize = AttachmentKind::MAX_TOTAL_FILES * MAX_FILE_SIZE + 1024 * 1024;

pub const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type. Only PDF/DOC/DOCX/JPEG/PNG allowed";
pub const FILE_TOO_LARGE_MESSAGE: &str = "File too large";
/// Raised for a file under an unknown field or beyond its field's count
pub const UNEXPECTED_FIELD_MESSAGE: &str = "Unexpected field";

/// Check if a MIME type is allowed
pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

/// Lowercase the essence of a `Content-Type` value, dropping parameters
pub fn normalize_content_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

/// The multipart file fields an application accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Resume,
    CoverLetter,
    Portfolio,
}

impl AttachmentKind {
    pub const ALL: [AttachmentKind; 3] = [
        AttachmentKind::Resume,
        AttachmentKind::CoverLetter,
        AttachmentKind::Portfolio,
    ];

    /// Sum of every field's max count
    pub const MAX_TOTAL_FILES: usize = 3 + 3 + 5;

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::CoverLetter => "coverLetter",
            Self::Portfolio => "portfolio",
        }
    }

    pub fn max_count(self) -> usize {
        match self {
            Self::Resume => 3,
            Self::CoverLetter => 3,
            Self::Portfolio => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_mime_types() {
        assert!(is_mime_type_allowed("application/pdf"));
        assert!(is_mime_type_allowed("application/msword"));
        assert!(is_mime_type_allowed(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(is_mime_type_allowed("image/jpeg"));
        assert!(is_mime_type_allowed("image/png"));
    }

    #[test]
    fn test_rejected_mime_types() {
        assert!(!is_mime_type_allowed("image/gif"));
        assert!(!is_mime_type_allowed("text/plain"));
        assert!(!is_mime_type_allowed("application/octet-stream"));
        assert!(!is_mime_type_allowed(""));
    }

    #[test]
    fn test_normalize_content_type() {
        assert_eq!(
            normalize_content_type(Some("Application/PDF; name=cv.pdf")),
            "application/pdf"
        );
        assert_eq!(normalize_content_type(None), "application/octet-stream");
        assert_eq!(normalize_content_type(Some("  ")), "application/octet-stream");
    }

    #[test]
    fn test_field_names_round_trip() {
        for kind in AttachmentKind::ALL {
            assert_eq!(AttachmentKind::from_field_name(kind.field_name()), Some(kind));
        }
        assert_eq!(AttachmentKind::from_field_name("avatar"), None);
        assert_eq!(AttachmentKind::from_field_name("cover_letter"), None);
    }

    #[test]
    fn test_total_files_matches_field_limits() {
        let total: usize = AttachmentKind::ALL.iter().map(|k| k.max_count()).sum();
        assert_eq!(total, AttachmentKind::MAX_TOTAL_FILES);
    }
}
